//! Page handlers
//!
//! The home page loads the default guild through the service layer. A
//! failed load is logged and the page renders its loading state instead.

use askama::Template;
use axum::extract::{Path, State};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, Redirect};
use axum_extra::extract::cookie::CookieJar;
use guild_service::dto::{CharacterResponse, GuildResponse, RaidProgressListResponse, RosterResponse};
use guild_service::{GuildService, RaidService, RosterService, ServiceResult};
use tracing::warn;

use crate::components::{
    render_component, AuthTarget, CookieConsent, Footer, GuildLogo, GuildStats, ProgressSummary,
    TestAuthButton,
};
use crate::consent::persistent_cookie;
use crate::i18n::{I18n, Lang, Translator, LANGUAGE_COOKIE};
use crate::WebState;

fn render<T: Template>(tmpl: T) -> Html<String> {
    Html(tmpl.render().unwrap_or_else(|e| {
        format!("<pre>Template error: {e}</pre>")
    }))
}

/// Language for this request
fn request_lang(jar: &CookieJar, headers: &HeaderMap) -> Lang {
    I18n::detect(
        jar.get(LANGUAGE_COOKIE).map(|cookie| cookie.value()),
        headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
    )
}

fn loaded<T>(what: &'static str, result: ServiceResult<T>) -> Option<T> {
    result
        .inspect_err(|e| warn!(error = %e, what, "Home page data unavailable"))
        .ok()
}

// ── Home ────────────────────────────────────────────────────────

struct RosterRow {
    name: String,
    class_name: String,
    text_class: &'static str,
    rank_name: &'static str,
    item_level: String,
}

impl From<&CharacterResponse> for RosterRow {
    fn from(c: &CharacterResponse) -> Self {
        Self {
            name: c.name.clone(),
            class_name: c.class_name.clone(),
            text_class: c.class_color.text_class,
            rank_name: c.rank_name,
            item_level: c
                .item_level
                .map(|ilvl| format!("{ilvl:.0}"))
                .unwrap_or_default(),
        }
    }
}

struct LanguageLink {
    code: &'static str,
    label: String,
    active: bool,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    lang: &'static str,
    title: String,
    realm: String,
    logo: String,
    stats: String,
    roster_title: String,
    roster_headers: [String; 4],
    roster_empty: String,
    roster: Vec<RosterRow>,
    auth_buttons: Vec<String>,
    languages: Vec<LanguageLink>,
    consent: String,
    footer: String,
}

pub async fn home(
    State(state): State<WebState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Html<String> {
    let lang = request_lang(&jar, &headers);
    let t = state.i18n.translator(lang);
    let key = state.ctx.default_key();

    let guild = loaded("guild", GuildService::new(&state.ctx).get_guild(&key).await);
    let progress = loaded("raid progress", RaidService::new(&state.ctx).get_progress(&key).await);
    let roster = loaded("roster", RosterService::new(&state.ctx).get_roster(&key).await);

    render(home_page(&state, &t, &key.name, &key.realm, guild.as_ref(), progress.as_ref(), roster.as_ref(), &jar))
}

#[allow(clippy::too_many_arguments)]
fn home_page(
    state: &WebState,
    t: &Translator<'_>,
    name: &str,
    realm: &str,
    guild: Option<&GuildResponse>,
    progress: Option<&RaidProgressListResponse>,
    roster: Option<&RosterResponse>,
    jar: &CookieJar,
) -> HomeTemplate {
    let summary = progress
        .and_then(|p| ProgressSummary::pick(&p.progresses, state.featured_raid.as_deref()));

    let logo = GuildLogo::new(guild.and_then(|g| g.emblem_url.as_deref()), t.t("guild.logoAlt"));
    let stats = GuildStats::new(
        guild.map(|g| g.member_count),
        summary.as_ref(),
        &t.t("guild.loading"),
    )
    .with_labels(t.t("guild.members"), t.t("guild.progress"));
    let consent = CookieConsent::mount(jar).with_labels(t.t("cookies.message"), t.t("cookies.accept"));
    let footer = Footer::new(name, t.t("footer.rights"), t.t("footer.disclaimer"));

    let auth_buttons = [
        (AuthTarget::ApiLogin, "auth.testLogin"),
        (AuthTarget::BattleNetDirect, "auth.testBnet"),
    ]
    .into_iter()
    .filter_map(|(target, label)| TestAuthButton::for_environment(state.env, target, t.t(label)))
    .map(|button| render_component(&button))
    .collect();

    let languages = Lang::ALL
        .into_iter()
        .map(|l| LanguageLink {
            code: l.code(),
            label: t.t(&format!("language.{}", l.code())),
            active: l == t.lang(),
        })
        .collect();

    HomeTemplate {
        lang: t.lang().code(),
        title: guild.map_or_else(|| name.to_string(), |g| g.name.clone()),
        realm: guild.map_or_else(|| realm.to_string(), |g| g.realm.clone()),
        logo: render_component(&logo),
        stats: render_component(&stats),
        roster_title: t.t("roster.title"),
        roster_headers: [
            t.t("roster.name"),
            t.t("roster.class"),
            t.t("roster.rank"),
            t.t("roster.itemLevel"),
        ],
        roster_empty: t.t("roster.empty"),
        roster: roster
            .map(|r| r.characters.iter().map(RosterRow::from).collect())
            .unwrap_or_default(),
        auth_buttons,
        languages,
        consent: render_component(&consent),
        footer: render_component(&footer),
    }
}

// ── Preferences ─────────────────────────────────────────────────

pub async fn accept_consent(mut jar: CookieJar) -> (CookieJar, Redirect) {
    let mut banner = CookieConsent::mount(&jar);
    banner.accept(&mut jar);
    (jar, Redirect::to("/"))
}

pub async fn set_language(
    Path(code): Path<String>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), StatusCode> {
    let lang = Lang::from_tag(&code).ok_or(StatusCode::NOT_FOUND)?;
    let jar = jar.add(persistent_cookie(LANGUAGE_COOKIE, lang.code()));
    Ok((jar, Redirect::to("/")))
}
