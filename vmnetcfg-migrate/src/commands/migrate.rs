use anyhow::Context;
use ipnet::IpNet;
use kube::{api::PostParams, Client, ResourceExt};
use log::{debug, error, info, warn};
use vmnetcfg_migrate_core::{
    kubernetes::operations::{create_resource, list_all_resources},
    resources::{
        crd::v1::virtualmachinenetworkconfig::VirtualMachineNetworkConfig,
        kubevirt::VirtualMachineInstance,
    },
};

use crate::{cli::GlobalArgs, CLI_FIELD_MANAGER};

/// Runs the single migration pass: scan instances, then create one
/// configuration object per instance. A failed creation is logged and never
/// aborts the batch.
pub async fn migrate(global_args: &GlobalArgs, subnet: &str, client: Client) -> anyhow::Result<()> {
    let configs = gather_network_configuration(&client, subnet).await?;

    let post_params = PostParams {
        dry_run: global_args.dry_run,
        field_manager: Some(CLI_FIELD_MANAGER.to_owned()),
    };

    let mut created = 0usize;
    let mut failed = 0usize;

    for config in &configs {
        match create_config_object(&client, config, &post_params).await {
            Ok(()) => created += 1,
            Err(error) => {
                error!("{error:#}");
                failed += 1;
            }
        }
    }

    info!("Migration pass complete ({created} objects created, {failed} failed).");

    Ok(())
}

async fn gather_network_configuration(
    client: &Client,
    subnet: &str,
) -> anyhow::Result<Vec<VirtualMachineNetworkConfig>> {
    let subnet: IpNet = subnet
        .parse()
        .context("The target subnet isn't a valid CIDR prefix!")?;

    let instances = list_all_resources::<VirtualMachineInstance>(client).await?;

    info!(
        "Scanning {} virtual machine instances for addresses inside '{subnet}'...",
        instances.items.len()
    );

    let mut configs = Vec::new();

    for instance in &instances.items {
        match VirtualMachineNetworkConfig::from_instance(instance, &subnet) {
            Ok(config) => {
                debug!("{config:#?}");
                configs.push(config);
            }
            Err(error) => warn!("Skipping an instance: {error}"),
        }
    }

    Ok(configs)
}

async fn create_config_object(
    client: &Client,
    config: &VirtualMachineNetworkConfig,
    post_params: &PostParams,
) -> anyhow::Result<()> {
    let created = create_resource(client, config, post_params).await?;

    info!(
        "Successfully created '{}/{}' network configuration.",
        created.namespace().unwrap_or_default(),
        created.name_any()
    );

    Ok(())
}
