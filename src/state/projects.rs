#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Placeholder image endpoint, parameterized by a percent-encoded seed.
const PLACEHOLDER_ENDPOINT: &str = "https://picsum.photos/seed";
/// Seed used when a project has no title to derive one from.
const FALLBACK_SEED: &str = "project";
/// Fixed thumbnail dimensions requested from the placeholder service.
const THUMB_WIDTH: u32 = 800;
const THUMB_HEIGHT: u32 = 480;

/// A single portfolio project.
///
/// Records are constructed once at startup and never mutated; `image` is an
/// explicit screenshot URL, with a seeded placeholder derived from the title
/// when absent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub title: String,
    pub desc: String,
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Project {
    /// Thumbnail source: the explicit image URL when present and non-empty,
    /// otherwise a deterministic placeholder seeded with the encoded title.
    pub fn thumbnail_url(&self) -> String {
        if let Some(image) = self.image.as_deref().filter(|url| !url.is_empty()) {
            return image.to_owned();
        }
        let seed = if self.title.is_empty() {
            FALLBACK_SEED
        } else {
            &self.title
        };
        format!(
            "{PLACEHOLDER_ENDPOINT}/{}/{THUMB_WIDTH}/{THUMB_HEIGHT}",
            encode_seed(seed)
        )
    }

    /// Accessible alt text for the thumbnail.
    pub fn alt_text(&self) -> String {
        if self.title.is_empty() {
            "Project screenshot".to_owned()
        } else {
            self.title.clone()
        }
    }
}

/// Percent-encode a placeholder seed with `encodeURIComponent` semantics:
/// RFC 3986 unreserved characters plus `!`, `'`, `(`, `)`, `*` stay bare.
/// `urlencoding::encode` alone would escape those five and change the seed
/// the placeholder service sees.
fn encode_seed(seed: &str) -> String {
    urlencoding::encode(seed)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Key for one grid entry in a keyed list render.
///
/// Position plus the full record, so duplicates, reordering, and any field
/// edit all map to a fresh node; a swapped dataset can never leave a card
/// showing the old dataset's content.
pub fn grid_key(index: usize, project: &Project) -> (usize, Project) {
    (index, project.clone())
}

/// The fixed project list rendered into `#projects-grid`, in display order.
pub fn sample_projects() -> Vec<Project> {
    let project = |title: &str, desc: &str, tech: &[&str]| Project {
        title: title.to_owned(),
        desc: desc.to_owned(),
        tech: tech.iter().map(|&t| t.to_owned()).collect(),
        image: None,
    };

    vec![
        project(
            "Todo App",
            "A small todo app with local persistence and responsive layout.",
            &["JavaScript", "HTML", "CSS"],
        ),
        project(
            "Portfolio Site",
            "Personal portfolio built with responsive design and smooth animations.",
            &["HTML", "CSS", "JS"],
        ),
        project(
            "API Explorer",
            "A tiny app to explore REST APIs, built with Node and Express.",
            &["Node.js", "Express"],
        ),
    ]
}
