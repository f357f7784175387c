pub mod helpers;
pub mod kubernetes;
pub mod resources;

pub const RESOURCE_GROUP: &str = "kubevirtiphelper.k8s.binbash.org";

pub const VMNETCFG_FINALIZER: &str = "kubevirtiphelper";
