mod container;
mod deployment;

pub use container::{Container, EnvList, EnvVar};
pub use deployment::{
    DeploymentManifest, DeploymentSpec, LabelSelector, LabelSet, ObjectMeta, PodMeta, PodSpec,
    PodTemplateSpec, API_VERSION, KIND,
};
