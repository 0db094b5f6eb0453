//! Unified spacer client.

use crate::assignments::AssignmentsClient;
use crate::courses::CoursesClient;
use crate::datasets::DatasetsClient;
use crate::documents::DocumentsClient;
use crate::exercises::ExercisesClient;
use crate::notebooks::NotebooksClient;
use crate::spaces::SpacesClient;
use nimbus_core::{ConfigHandle, ConfigUpdate, RequestConfig};

/// Composite client for the spacer service.
///
/// Owns one instance of each resource client, all constructed from the
/// same configuration cell at composite-construction time. An update
/// through [`SpacerClient::update_config`] is observed by every
/// sub-client on its next call.
#[derive(Debug, Clone)]
pub struct SpacerClient {
    config: ConfigHandle,
    /// Spaces client.
    pub spaces: SpacesClient,
    /// Notebooks client.
    pub notebooks: NotebooksClient,
    /// Documents client.
    pub documents: DocumentsClient,
    /// Assignments client.
    pub assignments: AssignmentsClient,
    /// Courses client.
    pub courses: CoursesClient,
    /// Exercises client.
    pub exercises: ExercisesClient,
    /// Datasets client.
    pub datasets: DatasetsClient,
}

impl SpacerClient {
    /// Create the composite over the given configuration cell.
    #[must_use]
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            spaces: SpacesClient::new(config.clone()),
            notebooks: NotebooksClient::new(config.clone()),
            documents: DocumentsClient::new(config.clone()),
            assignments: AssignmentsClient::new(config.clone()),
            courses: CoursesClient::new(config.clone()),
            exercises: ExercisesClient::new(config.clone()),
            datasets: DatasetsClient::new(config.clone()),
            config,
        }
    }

    /// Merge the given fields into the shared configuration cell.
    pub fn update_config(&self, update: ConfigUpdate) {
        self.config.update(update);
    }

    /// Copy of the current configuration.
    #[must_use]
    pub fn get_config(&self) -> RequestConfig {
        self.config.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn sub_clients_observe_config_updates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("Authorization", "Bearer t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(header("Authorization", "Bearer t2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(2)
            .mount(&server)
            .await;

        let client = SpacerClient::new(ConfigHandle::new(
            RequestConfig::new(server.uri()).with_token("t1"),
        ));

        client.spaces.get_user_spaces().await.unwrap();

        client.update_config(ConfigUpdate::new().with_token("t2"));

        client.spaces.get_user_spaces().await.unwrap();
        client.courses.get_user_course_enrollments().await.unwrap();
    }

    #[tokio::test]
    async fn get_config_returns_detached_copy() {
        let server = MockServer::start().await;
        let client = SpacerClient::new(ConfigHandle::new(RequestConfig::new(server.uri())));

        let mut copy = client.get_config();
        copy.base_url = "https://elsewhere".to_string();

        assert_eq!(client.get_config().base_url, server.uri());
    }
}
