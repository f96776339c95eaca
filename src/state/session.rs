use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

use crate::auth::AuthProvider;
use crate::error::{DietError, Result};
use crate::models::{Plan, Profile};
use crate::planner::{MealCatalog, compute_daily_target, generate_plan_with};

/// State of one signed-in user: the last profile and the plan made from it.
///
/// Each generation replaces the profile and plan together; a failed
/// generation leaves the previous ones in place.
#[derive(Debug)]
pub struct Session {
    username: String,
    profile: Option<Profile>,
    plan: Option<Plan>,
}

impl Session {
    /// Sign in through an auth provider.
    pub fn login<A: AuthProvider + ?Sized>(
        auth: &A,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        if !auth.authenticate(username, password)? {
            return Err(DietError::AuthenticationFailed(username.to_string()));
        }
        info!(username, "signed in");
        Ok(Self::for_user(username))
    }

    /// Session for an already authenticated user.
    pub fn for_user(username: &str) -> Self {
        Self {
            username: username.to_string(),
            profile: None,
            plan: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Daily target of the current profile, if one has been set.
    pub fn daily_target(&self) -> Option<u32> {
        self.profile.as_ref().map(compute_daily_target)
    }

    /// Generate a new plan and make it the current one.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        profile: Profile,
        catalog: &MealCatalog,
        start: NaiveDate,
        rng: &mut R,
    ) -> Result<&Plan> {
        let plan = generate_plan_with(&profile, catalog, start, rng)?;
        self.profile = Some(profile);
        Ok(&*self.plan.insert(plan))
    }
}
