use std::net::IpAddr;

use ipnet::IpNet;
use kube::{core::ObjectMeta, CustomResource};
use log::{info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    helpers::RequireMetadata,
    resources::{kubevirt::VirtualMachineInstance, ResourceGenerationError},
    VMNETCFG_FINALIZER,
};

#[derive(CustomResource, Deserialize, Serialize, Clone, Default, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    group = "kubevirtiphelper.k8s.binbash.org",
    version = "v1",
    kind = "VirtualMachineNetworkConfig",
    namespaced,
    derive = "Default"
)]
pub struct VirtualMachineNetworkConfigSpec {
    /// name of the source virtual machine
    pub vm_name: String,
    /// interfaces retained for adoption by the controller
    #[serde(default)]
    pub network_config: Vec<NetworkConfig>,
}

/// One retained interface of the source instance.
#[derive(Deserialize, Serialize, Clone, Default, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub ip_address: String,
    pub mac_address: String,
    pub network_name: String,
}

impl VirtualMachineNetworkConfig {
    /// Builds the migration object for a single instance, retaining only
    /// interfaces whose address lies inside `subnet` and which carry a MAC
    /// and a named secondary-network attachment. An instance with no
    /// retained interfaces still yields an object with an empty list.
    pub fn from_instance(
        vmi: &VirtualMachineInstance,
        subnet: &IpNet,
    ) -> Result<Self, ResourceGenerationError> {
        let name = vmi.require_name_or(ResourceGenerationError::SourceMissingMetadataName)?;
        let namespace =
            vmi.require_namespace_or(ResourceGenerationError::SourceMissingMetadataNamespace)?;

        let interfaces = vmi
            .status
            .as_ref()
            .map(|status| status.interfaces.as_slice())
            .unwrap_or_default();

        let mut network_config = Vec::new();

        for interface in interfaces {
            // loopback and not-yet-assigned interfaces report no usable address
            let address: IpAddr = match interface.ip_address.parse() {
                Ok(address) => address,
                Err(_) => continue,
            };

            if !subnet.contains(&address) {
                continue;
            }

            info!(
                "Processing '{name}' instance interface (ip={}, mac={}, guest interface={})...",
                interface.ip_address, interface.mac, interface.interface_name
            );

            if interface.mac.is_empty() {
                warn!(
                    "Interface '{}' of instance '{name}' has no MAC address assigned! Skipping...",
                    interface.name
                );
                continue;
            }

            let network = match vmi
                .spec
                .networks
                .iter()
                .find(|network| network.name == interface.name)
            {
                Some(network) => network,
                None => {
                    warn!(
                        "No declared network matches interface '{}' of instance '{name}'! Skipping...",
                        interface.name
                    );
                    continue;
                }
            };

            let multus = match &network.multus {
                Some(multus) => multus,
                None => {
                    warn!(
                        "Interface '{}' of instance '{name}' uses an unsupported network type! Skipping...",
                        interface.name
                    );
                    continue;
                }
            };

            if multus.network_name.is_empty() {
                warn!(
                    "Interface '{}' of instance '{name}' has no secondary network name! Skipping...",
                    interface.name
                );
                continue;
            }

            network_config.push(NetworkConfig {
                ip_address: interface.ip_address.clone(),
                mac_address: interface.mac.clone(),
                network_name: multus.network_name.clone(),
            });
        }

        Ok(Self {
            metadata: ObjectMeta {
                name: Some(name.to_owned()),
                namespace: Some(namespace.to_owned()),
                finalizers: Some(vec![VMNETCFG_FINALIZER.to_owned()]),
                ..Default::default()
            },
            spec: VirtualMachineNetworkConfigSpec {
                vm_name: name.to_owned(),
                network_config,
            },
        })
    }
}
