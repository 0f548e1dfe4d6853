use super::{Credential, Flow, Navigator, Workflow, WorkflowError, DASHBOARD_ROUTE};
use tracing::{debug, error, info, instrument, warn};

impl Workflow {
    /// Authenticate an administrator and check its `system_admins` record.
    ///
    /// A missing record denies access even though authentication succeeded;
    /// the provider session is left as is.
    ///
    /// # Errors
    /// Returns the reason the submission was denied.
    #[instrument(skip(self, credential, navigator), fields(email = %credential.email))]
    pub async fn login(
        &self,
        credential: &Credential,
        navigator: &dyn Navigator,
    ) -> Result<&'static str, WorkflowError> {
        credential.validate_login()?;

        let identity = self
            .provider
            .authenticate(&credential.email, &credential.password)
            .await
            .map_err(|source| {
                debug!("authentication rejected: {}", source.code());

                WorkflowError::Provider {
                    flow: Flow::Login,
                    source,
                }
            })?;

        let authorized = self.registry.exists(&identity).await.map_err(|source| {
            error!(identity = %identity, "error reading system admin record: {}", source);

            WorkflowError::Store {
                flow: Flow::Login,
                source,
            }
        })?;

        if !authorized {
            warn!(identity = %identity, "authenticated identity is not a system admin");

            return Err(WorkflowError::NotAuthorized { identity });
        }

        info!(identity = %identity, "system admin logged in");

        navigator.navigate(DASHBOARD_ROUTE);

        Ok(DASHBOARD_ROUTE)
    }
}
