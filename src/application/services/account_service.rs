use super::id_allocator::IdAllocator;
use super::outcome::SyncOutcome;
use crate::application::ports::password_hasher::PasswordHasher;
use crate::application::ports::remote_catalog::RemoteCatalogClient;
use crate::application::ports::repositories::UserRepository;
use crate::domain::entities::User;
use crate::domain::value_objects::UserId;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::warn;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// User lifecycle under the same write-through protocol as products:
/// registration commits remotely first and degrades to a local-only row
/// when the authority is unreachable.
pub struct AccountService {
    remote: Arc<dyn RemoteCatalogClient>,
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
    pub fn new(
        remote: Arc<dyn RemoteCatalogClient>,
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            remote,
            users,
            hasher,
        }
    }

    pub async fn register(&self, account: NewAccount) -> Result<SyncOutcome<User>, AppError> {
        let email = account.email.trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation("A valid email is required".to_string()));
        }
        if account.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.users.get_by_email(&email).await?.is_some() {
            return Err(AppError::Validation(format!(
                "Email {email} is already registered"
            )));
        }

        let digest = self.hasher.hash(&account.password)?;
        let mut user = User::new(account.name, account.last_name, email, digest);
        user.phone = account.phone;
        user.address = account.address;

        match self.remote.create_user(&user).await {
            Ok(confirmed) => {
                self.users.upsert(&confirmed).await?;
                Ok(SyncOutcome::Synced(confirmed))
            }
            Err(err) => {
                warn!("Remote user create failed, committing locally: {err}");
                user.assign_id(UserId::new(IdAllocator::wall_clock_id()));
                self.users.upsert(&user).await?;
                Ok(SyncOutcome::LocalOnly(user, err.to_string()))
            }
        }
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No account for {email}")))?;

        if self.hasher.verify(password, &user.password_hash)? {
            Ok(user)
        } else {
            Err(AppError::Unauthorized("Invalid credentials".to_string()))
        }
    }

    /// Same protocol as product updates: remote attempt, unconditional
    /// local write, remote-confirmed flag.
    pub async fn update_profile(&self, user: &User) -> Result<bool, AppError> {
        let remote_ok = match self.remote.update_user(user).await {
            Ok(_) => true,
            Err(err) => {
                warn!("Remote update of user {} failed: {err}", user.id);
                false
            }
        };
        self.users.upsert(user).await?;
        Ok(remote_ok)
    }

    pub async fn by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        self.users.get(id).await
    }
}
