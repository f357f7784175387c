use thiserror::Error;

pub mod crd;
pub mod kubevirt;

#[derive(Debug, Error)]
pub enum ResourceGenerationError {
    #[error("Source instance is missing a name!")]
    SourceMissingMetadataName,
    #[error("Source instance is missing a namespace!")]
    SourceMissingMetadataNamespace,
}
