use std::sync::Arc;

use chrono::Utc;
use doublezero_controlplane_model::{Error, MetricsSink};
use solana_sdk::pubkey::Pubkey;
use tonic::{Request, Response, Status};

use crate::audit::AuditSink;
use crate::rpc_handler::{GetConfigRequest as HandlerRequest, RpcHandler};

pub mod proto {
    tonic::include_proto!("doublezero.controller.v1");
}

use proto::controller_service_server::ControllerService;
use proto::{GetConfigHashResponse, GetConfigRequest, GetConfigResponse};

pub struct ControllerServiceImpl<M> {
    handler: Arc<RpcHandler<M>>,
    audit: Arc<dyn AuditSink>,
}

impl<M: MetricsSink> ControllerServiceImpl<M> {
    pub fn new(handler: Arc<RpcHandler<M>>, audit: Arc<dyn AuditSink>) -> Self {
        Self { handler, audit }
    }

    fn to_handler_request(req: &GetConfigRequest) -> Result<HandlerRequest, Status> {
        let pubkey = Pubkey::try_from(req.pubkey.as_slice())
            .map_err(|_| Status::invalid_argument("malformed device pubkey"))?;
        Ok(HandlerRequest {
            pubkey,
            bgp_peers: req.bgp_peers.clone(),
            agent_version: req.agent_version.clone(),
            agent_commit: req.agent_commit.clone(),
            agent_date: req.agent_date.clone(),
        })
    }
}

fn to_status(err: Error) -> Status {
    match err {
        Error::NotFound(pk) => Status::not_found(format!("device {pk} not found")),
        Error::FailedPrecondition(pk, pathologies) => Status::failed_precondition(format!(
            "device {pk} has pathologies: {pathologies:?}"
        )),
        Error::Aborted(pk, reason) => {
            Status::aborted(format!("failed to render config for {pk}: {reason}"))
        }
        Error::Internal(reason) => Status::internal(reason),
        other => Status::internal(other.to_string()),
    }
}

#[tonic::async_trait]
impl<M: MetricsSink + 'static> ControllerService for ControllerServiceImpl<M> {
    async fn get_config(
        &self,
        request: Request<GetConfigRequest>,
    ) -> Result<Response<GetConfigResponse>, Status> {
        let req = request.into_inner();
        let handler_req = Self::to_handler_request(&req)?;
        self.audit.record(Utc::now(), handler_req.pubkey);
        let config_text = self
            .handler
            .get_config(&handler_req)
            .map_err(to_status)?;
        Ok(Response::new(GetConfigResponse { config_text }))
    }

    async fn get_config_hash(
        &self,
        request: Request<GetConfigRequest>,
    ) -> Result<Response<GetConfigHashResponse>, Status> {
        let req = request.into_inner();
        let handler_req = Self::to_handler_request(&req)?;
        self.audit.record(Utc::now(), handler_req.pubkey);
        let sha256_hex = self
            .handler
            .get_config_hash(&handler_req)
            .map_err(to_status)?;
        Ok(Response::new(GetConfigHashResponse { sha256_hex }))
    }
}
