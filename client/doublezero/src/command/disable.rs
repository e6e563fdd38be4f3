use crate::{
    requirements::check_doublezero,
    servicecontroller::{ServiceController, ServiceControllerImpl},
};
use clap::Args;
use doublezero_cli::doublezerocommand::CliCommand;

#[derive(Args, Debug)]
pub struct DisableCliCommand {}

impl DisableCliCommand {
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
            if !v2.reconciler_enabled {
                println!("Reconciler already disabled");
                return Ok(());
            }
            // Check if any services are active and warn the user.
            let has_active = v2.services.iter().any(|s| s.user_type.is_some());
            if has_active {
                println!("Active tunnel(s) will be torn down");
            }
        }

        controller.disable().await?;
        println!("Reconciler disabled");
        Ok(())
    }
}
