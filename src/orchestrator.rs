//! Request orchestration.
//!
//! One method per incoming action: resolve the session, run the action (which
//! authorizes internally), and map the result to a redirect target or a
//! rendered page. Domain failures never leave this boundary as raw errors;
//! they become a redirect back to the originating form. Infrastructure
//! faults (`Storage`, `Render`) do propagate, for the transport to turn into
//! a server error.

use crate::actions::{
    CreateTalkAction, DeleteTalkAction, ListTalksAction, LoginAction, LogoutAction, ProfileUpdate,
    RegisterAction, ToggleSelectAction, UpdateProfileAction, UpdateTalkAction,
};
use crate::crypto::PasswordHasher;
use crate::render::{HomeContext, ProfileContext, TalkListContext, ViewRenderer};
use crate::session::{RequestContext, SessionManager, SessionRepository};
use crate::{ServiceError, Talk, TalkDraft, TalkRepository, UserRepository};

/// The surfaces a request can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Canonical landing route for successful mutations.
    Home,
    Login,
    Register,
    Talks,
    NewTalk,
    Profile,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Talks => "/talks",
            Route::NewTalk => "/talks/new",
            Route::Profile => "/profile",
        }
    }
}

/// What a handled request produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Redirect(Route),
    Page(String),
}

/// Result of a login attempt: where to send the client, and the fresh
/// session token to bind if authentication succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginRedirect {
    pub route: Route,
    pub session_token: Option<String>,
}

pub struct Orchestrator<U, T, S, P, V>
where
    U: UserRepository + Clone,
    T: TalkRepository + Clone,
    S: SessionRepository + Clone,
    P: PasswordHasher + Clone,
    V: ViewRenderer,
{
    users: U,
    talks: T,
    sessions: SessionManager<S>,
    hasher: P,
    renderer: V,
}

/// Maps a domain failure to the redirect the user should land on.
///
/// `NotAuthenticated` always goes to the login surface; everything else goes
/// back to the originating form. Infrastructure faults are not recovered.
fn recover(err: ServiceError, fallback: Route) -> Result<Route, ServiceError> {
    match err {
        ServiceError::Storage(_) | ServiceError::Render(_) => Err(err),
        ServiceError::NotAuthenticated => Ok(Route::Login),
        other => {
            log::warn!(
                target: "lectern",
                "msg=\"request failed\" error=\"{other}\" redirect={}",
                fallback.path()
            );
            Ok(fallback)
        }
    }
}

impl<U, T, S, P, V> Orchestrator<U, T, S, P, V>
where
    U: UserRepository + Clone,
    T: TalkRepository + Clone,
    S: SessionRepository + Clone,
    P: PasswordHasher + Clone,
    V: ViewRenderer,
{
    pub fn new(users: U, talks: T, sessions: SessionManager<S>, hasher: P, renderer: V) -> Self {
        Self {
            users,
            talks,
            sessions,
            hasher,
            renderer,
        }
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Route, ServiceError> {
        let action = RegisterAction::new(self.users.clone(), self.hasher.clone());
        match action.execute(username, password).await {
            Ok(_) => Ok(Route::Login),
            Err(err) => recover(err, Route::Register),
        }
    }

    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginRedirect, ServiceError> {
        let action = LoginAction::new(
            self.users.clone(),
            self.sessions.clone(),
            self.hasher.clone(),
        );
        match action.execute(username, password).await {
            Ok((_, token)) => Ok(LoginRedirect {
                route: Route::Home,
                session_token: Some(token),
            }),
            Err(err) => {
                let route = recover(err, Route::Login)?;
                Ok(LoginRedirect {
                    route,
                    session_token: None,
                })
            }
        }
    }

    pub async fn logout(&self, ctx: &RequestContext) -> Result<Route, ServiceError> {
        LogoutAction::new(self.sessions.clone()).execute(ctx).await?;
        Ok(Route::Login)
    }

    /// The landing page: selected "next" talks plus the caller's own.
    pub async fn home(&self, ctx: &RequestContext) -> Result<Outcome, ServiceError> {
        let identity = self.sessions.resolve(ctx).await?;
        let Some(identity) = identity else {
            return Ok(Outcome::Redirect(Route::Login));
        };

        let talks = ListTalksAction::new(self.talks.clone())
            .execute(Some(&identity))
            .await?;
        let context = HomeContext::build(identity.username, &talks);
        let value =
            serde_json::to_value(&context).map_err(|e| ServiceError::Render(e.to_string()))?;

        let page = self.renderer.render("index", value).await?;
        Ok(Outcome::Page(page))
    }

    pub async fn list_talks(&self, ctx: &RequestContext) -> Result<Outcome, ServiceError> {
        let identity = self.sessions.resolve(ctx).await?;
        let Some(identity) = identity else {
            return Ok(Outcome::Redirect(Route::Login));
        };

        let talks = ListTalksAction::new(self.talks.clone())
            .execute(Some(&identity))
            .await?;
        let context = TalkListContext {
            title: "Talks".to_owned(),
            username: identity.username,
            talks,
        };
        let value =
            serde_json::to_value(&context).map_err(|e| ServiceError::Render(e.to_string()))?;

        let page = self.renderer.render("talks", value).await?;
        Ok(Outcome::Page(page))
    }

    /// The caller's own account page.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<Outcome, ServiceError> {
        let identity = self.sessions.resolve(ctx).await?;
        let Some(identity) = identity else {
            return Ok(Outcome::Redirect(Route::Login));
        };

        // A live session pointing at a deleted account is treated as stale
        let Some(user) = self.users.find_user_by_id(identity.user_id).await? else {
            return Ok(Outcome::Redirect(Route::Login));
        };

        let context = ProfileContext { user };
        let value =
            serde_json::to_value(&context).map_err(|e| ServiceError::Render(e.to_string()))?;

        let page = self.renderer.render("profile", value).await?;
        Ok(Outcome::Page(page))
    }

    pub async fn create_talk(
        &self,
        ctx: &RequestContext,
        draft: TalkDraft,
    ) -> Result<Route, ServiceError> {
        let identity = self.sessions.resolve(ctx).await?;
        let action = CreateTalkAction::new(self.talks.clone());
        match action.execute(identity.as_ref(), draft).await {
            Ok(_) => Ok(Route::Home),
            Err(err) => recover(err, Route::NewTalk),
        }
    }

    pub async fn update_talk(
        &self,
        ctx: &RequestContext,
        talk: &Talk,
    ) -> Result<Route, ServiceError> {
        let identity = self.sessions.resolve(ctx).await?;
        let action = UpdateTalkAction::new(self.talks.clone());
        match action.execute(identity.as_ref(), talk).await {
            Ok(_) => Ok(Route::Home),
            Err(err) => recover(err, Route::Talks),
        }
    }

    pub async fn toggle_select(
        &self,
        ctx: &RequestContext,
        talk_id: i64,
    ) -> Result<Route, ServiceError> {
        let identity = self.sessions.resolve(ctx).await?;
        let action = ToggleSelectAction::new(self.talks.clone());
        match action.execute(identity.as_ref(), talk_id).await {
            Ok(_) => Ok(Route::Home),
            Err(err) => recover(err, Route::Talks),
        }
    }

    pub async fn delete_talk(
        &self,
        ctx: &RequestContext,
        talk: &Talk,
    ) -> Result<Route, ServiceError> {
        let identity = self.sessions.resolve(ctx).await?;
        let action = DeleteTalkAction::new(self.talks.clone());
        match action.execute(identity.as_ref(), talk).await {
            Ok(()) => Ok(Route::Home),
            Err(err) => recover(err, Route::Talks),
        }
    }

    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        update: ProfileUpdate,
    ) -> Result<Route, ServiceError> {
        let identity = self.sessions.resolve(ctx).await?;
        let action = UpdateProfileAction::new(self.users.clone(), self.hasher.clone());
        match action.execute(identity.as_ref(), update).await {
            Ok(_) => Ok(Route::Home),
            Err(err) => recover(err, Route::Profile),
        }
    }

    pub fn sessions(&self) -> &SessionManager<S> {
        &self.sessions
    }
}
