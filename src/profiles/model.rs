/**
 * Profile Document Model
 *
 * One profile document per account. Updates arrive as a partial structure
 * (every field optional) and are merged key-by-key against the stored
 * document; experience and education entries live in ordered lists with
 * head insertion.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Named social URLs. Rebuilt wholesale from each upsert: fields omitted from
/// the request are cleared, not preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub school: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(rename = "fieldOfStudy")]
    pub field_of_study: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    /// Owning account id. At most one profile exists per owner.
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

/// Partial update for the upsert: every field optional, merged key-by-key.
/// `skills` arrives as one comma-separated string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub handle: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// Split a comma-separated skills string into an ordered, trimmed list.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(|skill| skill.trim().to_owned()).collect()
}

impl Profile {
    /// Fresh profile for an owner, populated from the first upsert.
    pub fn new(user_id: &str, update: ProfileUpdate) -> Self {
        let mut profile = Profile {
            id: Uuid::new_v4().to_string(),
            user: user_id.to_owned(),
            handle: None,
            company: None,
            website: None,
            location: None,
            bio: None,
            status: String::new(),
            githubusername: None,
            skills: Vec::new(),
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            date: Utc::now(),
        };
        profile.apply(update);
        profile
    }

    /// Merge a partial update into the document. Omitted scalar fields are
    /// left untouched; `social` is rebuilt from the request every time.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(handle) = update.handle {
            self.handle = Some(handle);
        }
        if let Some(company) = update.company {
            self.company = Some(company);
        }
        if let Some(website) = update.website {
            self.website = Some(website);
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(githubusername) = update.githubusername {
            self.githubusername = Some(githubusername);
        }
        if let Some(skills) = update.skills {
            self.skills = parse_skills(&skills);
        }
        self.social = SocialLinks {
            youtube: update.youtube,
            twitter: update.twitter,
            facebook: update.facebook,
            linkedin: update.linkedin,
            instagram: update.instagram,
        };
    }
}
