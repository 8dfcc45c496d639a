use askama::Template;
use guild_core::Difficulty;
use guild_service::dto::RaidProgressResponse;

/// Headline progress of one raid at one difficulty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    pub raid_name: String,
    pub difficulty: Difficulty,
    pub defeated: i32,
    pub total: i32,
}

impl ProgressSummary {
    /// Pick the headline row: the featured raid if present, at the hardest
    /// difficulty with a kill, else its easiest tracked difficulty
    pub fn pick(progresses: &[RaidProgressResponse], featured_raid: Option<&str>) -> Option<Self> {
        let candidates: Vec<&RaidProgressResponse> = match featured_raid {
            Some(slug) if progresses.iter().any(|p| p.raid_slug == slug) => {
                progresses.iter().filter(|p| p.raid_slug == slug).collect()
            }
            _ => progresses.iter().collect(),
        };

        let row = candidates
            .iter()
            .filter(|p| p.bosses_defeated > 0)
            .max_by_key(|p| p.difficulty)
            .or_else(|| candidates.iter().min_by_key(|p| p.difficulty))?;

        Some(Self {
            raid_name: row.raid_name.clone(),
            difficulty: row.difficulty,
            defeated: row.bosses_defeated,
            total: row.bosses,
        })
    }
}

/// "3/8 Mythic Liberation of Undermine", or "Loading..." without data
pub fn progress_label(summary: Option<&ProgressSummary>) -> String {
    match summary {
        Some(s) => format!(
            "{}/{} {} {}",
            s.defeated,
            s.total,
            s.difficulty.display_name(),
            s.raid_name
        ),
        None => "Loading...".to_string(),
    }
}

#[derive(Debug, Clone, Template)]
#[template(path = "components/guild_stats.html")]
pub struct GuildStats {
    pub member_count: Option<i32>,
    pub progress: String,
    pub members_label: String,
    pub progress_heading: String,
}

impl GuildStats {
    /// `loading` replaces the English placeholder in other languages
    pub fn new(
        member_count: Option<i32>,
        summary: Option<&ProgressSummary>,
        loading: &str,
    ) -> Self {
        let progress = match summary {
            Some(_) => progress_label(summary),
            None => loading.to_string(),
        };
        Self {
            member_count,
            progress,
            members_label: String::new(),
            progress_heading: String::new(),
        }
    }

    pub fn with_labels(mut self, members_label: String, progress_heading: String) -> Self {
        self.members_label = members_label;
        self.progress_heading = progress_heading;
        self
    }
}
