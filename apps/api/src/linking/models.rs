use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of content a post represents on a portfolio site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Project,
    BlogPost,
    CaseStudy,
    Tutorial,
    Talk,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Project => "project",
            ContentType::BlogPost => "blog_post",
            ContentType::CaseStudy => "case_study",
            ContentType::Tutorial => "tutorial",
            ContentType::Talk => "talk",
        }
    }
}

/// The seven permitted relationship kinds between two posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkType {
    Related,
    Parent,
    Child,
    Sequential,
    Complementary,
    Prerequisite,
    FollowUp,
}

impl LinkType {
    pub const ALL: [LinkType; 7] = [
        LinkType::Related,
        LinkType::Parent,
        LinkType::Child,
        LinkType::Sequential,
        LinkType::Complementary,
        LinkType::Prerequisite,
        LinkType::FollowUp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Related => "related",
            LinkType::Parent => "parent",
            LinkType::Child => "child",
            LinkType::Sequential => "sequential",
            LinkType::Complementary => "complementary",
            LinkType::Prerequisite => "prerequisite",
            LinkType::FollowUp => "follow-up",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A post as presented to the linker.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub content_type: ContentType,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub linked_skills: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A directed relationship proposed by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkProposal {
    pub source_id: String,
    pub target_id: String,
    pub link_type: LinkType,
    pub reason: String,
}

/// Expected reply document: `{"links": [...]}`.
#[derive(Debug, Deserialize)]
pub struct LinkReply {
    pub links: Vec<LinkProposal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_type_wire_names() {
        let names: Vec<String> = LinkType::ALL
            .iter()
            .map(|t| serde_json::to_string(t).unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "\"related\"",
                "\"parent\"",
                "\"child\"",
                "\"sequential\"",
                "\"complementary\"",
                "\"prerequisite\"",
                "\"follow-up\"",
            ]
        );
    }

    #[test]
    fn test_as_str_matches_serde() {
        for link_type in LinkType::ALL {
            let json = serde_json::to_string(&link_type).unwrap();
            assert_eq!(json.trim_matches('"'), link_type.as_str());
        }
    }

    #[test]
    fn test_unknown_link_type_rejected() {
        assert!(serde_json::from_str::<LinkType>("\"cousin\"").is_err());
    }

    #[test]
    fn test_post_summary_camel_case_with_defaults() {
        let post: PostSummary = serde_json::from_value(serde_json::json!({
            "id": "post_1",
            "title": "Rust at the edge",
            "contentType": "blog_post"
        }))
        .unwrap();
        assert_eq!(post.content_type, ContentType::BlogPost);
        assert!(post.excerpt.is_none());
        assert!(post.linked_skills.is_empty());
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_link_proposal_camel_case() {
        let proposal: LinkProposal = serde_json::from_value(serde_json::json!({
            "sourceId": "a",
            "targetId": "b",
            "linkType": "follow-up",
            "reason": "B continues A"
        }))
        .unwrap();
        assert_eq!(proposal.link_type, LinkType::FollowUp);
        assert_eq!(proposal.target_id, "b");
    }
}
