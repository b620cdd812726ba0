pub mod builder;
pub mod k8s;
pub mod normalize;
pub mod render;

pub use builder::DeploymentBuilder;
pub use k8s::{DeploymentManifest, EnvList, EnvVar, LabelSet};
pub use normalize::{parse_envs, parse_labels, parse_replicas};
pub use render::{to_yaml, write_manifest};
