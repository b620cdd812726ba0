use deploygen_common::{debug, settings::DEFAULT_IMAGE};

use crate::k8s::{
    Container, DeploymentManifest, DeploymentSpec, EnvList, LabelSelector, LabelSet, ObjectMeta,
    PodMeta, PodSpec, PodTemplateSpec, API_VERSION, KIND,
};

pub const DEFAULT_REPLICAS: i32 = 3;

const APP_LABEL: &str = "app";

#[derive(Debug, Clone)]
pub struct DeploymentBuilder {
    name: String,
    image: String,
    labels: Option<LabelSet>,
    replicas: Option<i32>,
    envs: Option<EnvList>,
}

impl DeploymentBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            labels: None,
            replicas: None,
            envs: None,
        }
    }

    pub fn image(mut self, image: &str) -> Self {
        self.image = image.to_string();
        self
    }

    pub fn labels(mut self, labels: Option<LabelSet>) -> Self {
        self.labels = labels;
        self
    }

    pub fn replicas(mut self, replicas: Option<i32>) -> Self {
        self.replicas = replicas;
        self
    }

    pub fn envs(mut self, envs: Option<EnvList>) -> Self {
        self.envs = envs;
        self
    }

    /// Assembles the manifest. `app=<name>` is always present on the selector
    /// and the pod template; supplied labels are layered over the template
    /// labels and win on collision, but never touch the selector.
    pub fn build(self) -> DeploymentManifest {
        let Self {
            name,
            image,
            labels,
            replicas,
            envs,
        } = self;

        let selector_labels = app_labels(&name);
        let mut template_labels = app_labels(&name);
        if let Some(labels) = &labels {
            template_labels.extend(labels.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        let mut container = Container::new(&name, &image);
        container.env = envs;

        let replicas = replicas.unwrap_or(DEFAULT_REPLICAS);
        debug!(%name, %image, replicas, "building deployment manifest");

        DeploymentManifest {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: ObjectMeta {
                name,
                labels,
            },
            spec: DeploymentSpec {
                replicas,
                selector: LabelSelector {
                    match_labels: selector_labels,
                },
                template: PodTemplateSpec {
                    metadata: PodMeta {
                        labels: template_labels,
                    },
                    spec: PodSpec {
                        containers: vec![container],
                    },
                },
            },
        }
    }
}

fn app_labels(name: &str) -> LabelSet {
    LabelSet::from_iter([(APP_LABEL.to_string(), name.to_string())])
}
