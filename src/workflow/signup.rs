use super::{
    AuthorizationRecord, Credential, Flow, Navigator, Workflow, WorkflowError, LOGIN_ROUTE,
};
use tracing::{debug, error, info, instrument};

impl Workflow {
    /// Register a new administrator and write its `system_admins` record.
    ///
    /// Returns the redirect target after navigating to it. A failed record
    /// write leaves the registered identity without a record; it is neither
    /// rolled back nor retried.
    ///
    /// # Errors
    /// Returns the reason the submission was denied.
    #[instrument(skip(self, credential, navigator), fields(email = %credential.email))]
    pub async fn sign_up(
        &self,
        credential: &Credential,
        navigator: &dyn Navigator,
    ) -> Result<&'static str, WorkflowError> {
        credential.validate_signup()?;

        let identity = self
            .provider
            .register(&credential.email, &credential.password)
            .await
            .map_err(|source| {
                debug!("registration rejected: {}", source.code());

                WorkflowError::Provider {
                    flow: Flow::SignUp,
                    source,
                }
            })?;

        let record = AuthorizationRecord::system_admin(identity.clone(), credential.email.clone());

        self.registry.insert(&record).await.map_err(|source| {
            error!(
                identity = %identity,
                "registered identity has no system admin record: {}", source
            );

            WorkflowError::Store {
                flow: Flow::SignUp,
                source,
            }
        })?;

        info!(identity = %identity, "system admin registered");

        navigator.navigate(LOGIN_ROUTE);

        Ok(LOGIN_ROUTE)
    }
}
