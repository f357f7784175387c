use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Read-only view of a kubevirt.io/v1 VirtualMachineInstance, narrowed to the
/// fields the migration needs. Unknown fields are ignored and absent ones
/// defaulted, so any cluster-reported instance deserializes.
#[derive(CustomResource, Deserialize, Serialize, Clone, Default, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    group = "kubevirt.io",
    version = "v1",
    kind = "VirtualMachineInstance",
    namespaced,
    status = "VirtualMachineInstanceStatus",
    derive = "Default"
)]
pub struct VirtualMachineInstanceSpec {
    /// networks declared for this instance
    #[serde(default)]
    pub networks: Vec<Network>,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Default, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// logical interface name the attachment is bound to
    #[serde(default)]
    pub name: String,
    /// secondary network reference, present for multus-attached interfaces
    pub multus: Option<MultusNetwork>,
    /// default pod network marker
    pub pod: Option<PodNetwork>,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Default, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MultusNetwork {
    #[serde(default)]
    pub network_name: String,
    pub default: Option<bool>,
}

#[derive(Deserialize, Serialize, Clone, Default, Debug, JsonSchema)]
pub struct PodNetwork {}

#[derive(Deserialize, Serialize, Clone, Default, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineInstanceStatus {
    /// live interfaces as reported by the guest agent
    #[serde(default)]
    pub interfaces: Vec<VirtualMachineInstanceNetworkInterface>,
}

#[derive(Deserialize, Serialize, Clone, Default, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineInstanceNetworkInterface {
    /// primary address; empty for interfaces without an assigned address
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    #[serde(default)]
    pub mac: String,
    /// name of the declared network this interface belongs to
    #[serde(default)]
    pub name: String,
    /// interface name inside the guest
    #[serde(default)]
    pub interface_name: String,
}

#[cfg(test)]
mod tests {
    use super::VirtualMachineInstance;

    #[test]
    fn cluster_reported_instance_deserializes_into_the_narrowed_view() {
        let reported = serde_json::json!({
            "apiVersion": "kubevirt.io/v1",
            "kind": "VirtualMachineInstance",
            "metadata": {
                "name": "vm-a",
                "namespace": "default",
                "uid": "5d308a55-b02c-4f47-922a-93b66ff3a95b"
            },
            "spec": {
                "domain": {
                    "devices": {
                        "interfaces": [
                            { "name": "default", "masquerade": {} },
                            { "name": "net1", "bridge": {} }
                        ]
                    }
                },
                "networks": [
                    { "name": "default", "pod": {} },
                    { "name": "net1", "multus": { "networkName": "vlan100" } }
                ]
            },
            "status": {
                "phase": "Running",
                "nodeName": "node-1",
                "interfaces": [
                    {
                        "ipAddress": "10.0.0.5",
                        "ipAddresses": ["10.0.0.5"],
                        "mac": "aa:bb:cc:dd:ee:ff",
                        "name": "net1",
                        "interfaceName": "eth1",
                        "infoSource": "domain, guest-agent"
                    },
                    {
                        "name": "default",
                        "interfaceName": "eth0"
                    }
                ]
            }
        });

        let vmi: VirtualMachineInstance = serde_json::from_value(reported).unwrap();
        let status = vmi.status.unwrap();

        assert_eq!(vmi.metadata.name.as_deref(), Some("vm-a"));
        assert_eq!(vmi.spec.networks.len(), 2);
        assert!(vmi.spec.networks[0].pod.is_some());
        assert_eq!(
            vmi.spec.networks[1].multus.as_ref().unwrap().network_name,
            "vlan100"
        );
        assert_eq!(status.interfaces.len(), 2);
        assert_eq!(status.interfaces[0].ip_address, "10.0.0.5");
        assert_eq!(status.interfaces[0].mac, "aa:bb:cc:dd:ee:ff");
        assert_eq!(status.interfaces[1].ip_address, "");
    }
}
