use crate::{
    requirements::check_doublezero,
    servicecontroller::{ServiceController, ServiceControllerImpl},
};
use clap::Args;
use doublezero_cli::doublezerocommand::CliCommand;

#[derive(Args, Debug)]
pub struct EnableCliCommand {}

impl EnableCliCommand {
    pub async fn execute(&self, client: &dyn CliCommand) -> eyre::Result<()> {
        let controller = ServiceControllerImpl::new(None);
        self.execute_with_service_controller(client, &controller)
            .await
    }

    pub async fn execute_with_service_controller<T: ServiceController>(
        &self,
        client: &dyn CliCommand,
        controller: &T,
    ) -> eyre::Result<()> {
        check_doublezero(controller, client, None).await?;
        if let Ok(v2) = controller.v2_status().await {
            if v2.reconciler_enabled {
                println!("Reconciler already enabled");
                return Ok(());
            }
        }
        controller.enable().await?;
        println!("Reconciler enabled");
        Ok(())
    }
}
