use crate::error::PlannerError;
use crate::ports::Collaboration;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
    pub id: String,
    pub players: BTreeSet<u64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shortlist {
    pub id: String,
    pub private: bool,
    pub players: Vec<u64>,
}

/// An in-process `Collaboration` backend holding labels and shortlists in maps.
#[derive(Debug, Default)]
pub struct InMemoryCollaboration {
    labels: BTreeMap<String, Label>,
    /// Keyed by (user id, shortlist name).
    shortlists: BTreeMap<(String, String), Shortlist>,
    comments: BTreeMap<u64, Vec<String>>,
    next_id: u64,
}

impl InMemoryCollaboration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self, name: &str) -> Option<&Label> {
        self.labels.get(name)
    }

    pub fn labels(&self) -> impl Iterator<Item = (&String, &Label)> {
        self.labels.iter()
    }

    pub fn shortlist(&self, user_id: &str, name: &str) -> Option<&Shortlist> {
        self.shortlists.get(&(user_id.to_string(), name.to_string()))
    }

    /// Comments on a player, oldest first.
    pub fn comments(&self, player_id: u64) -> &[String] {
        self.comments.get(&player_id).map(Vec::as_slice).unwrap_or_default()
    }

    fn issue_id(&mut self, kind: &str) -> String {
        self.next_id += 1;
        format!("{kind}-{}", self.next_id)
    }
}

impl Collaboration for InMemoryCollaboration {
    fn set_comment(&mut self, comment: &str, player_id: u64) -> Result<(), PlannerError> {
        self.comments
            .entry(player_id)
            .or_default()
            .push(comment.to_string());
        Ok(())
    }

    fn get_label(&self, name: &str) -> Option<String> {
        self.labels.get(name).map(|l| l.id.clone())
    }

    fn add_label(&mut self, name: &str) -> Result<(), PlannerError> {
        self.delete_label(name)?;
        let id = self.issue_id("label");
        tracing::debug!(label = name, %id, "Label created.");
        self.labels.insert(name.to_string(), Label {
            id,
            players: BTreeSet::new(),
        });
        Ok(())
    }

    fn delete_label(&mut self, name: &str) -> Result<(), PlannerError> {
        if self.labels.remove(name).is_some() {
            tracing::debug!(label = name, "Label deleted.");
        }
        Ok(())
    }

    fn put_player_labels(&mut self, name: &str, players: &[u64]) -> Result<(), PlannerError> {
        let label = self
            .labels
            .get_mut(name)
            .ok_or_else(|| PlannerError::LabelNotFound(name.to_string()))?;
        label.players.extend(players.iter().copied());
        Ok(())
    }

    fn get_shortlist(&self, name: &str, user_id: &str) -> Option<String> {
        self.shortlist(user_id, name).map(|s| s.id.clone())
    }

    fn add_shortlist(&mut self, user_id: &str, name: &str, private: bool) -> Result<(), PlannerError> {
        if let Some(existing) = self.get_shortlist(name, user_id) {
            self.delete_shortlist(&existing)?;
        }
        let id = self.issue_id("shortlist");
        self.shortlists.insert((user_id.to_string(), name.to_string()), Shortlist {
            id,
            private,
            players: Vec::new(),
        });
        Ok(())
    }

    fn delete_shortlist(&mut self, shortlist_id: &str) -> Result<(), PlannerError> {
        self.shortlists.retain(|_, s| s.id != shortlist_id);
        Ok(())
    }

    fn add_players_to_shortlist(
        &mut self,
        user_id: &str,
        name: &str,
        players: &[u64],
    ) -> Result<(), PlannerError> {
        let shortlist = self
            .shortlists
            .get_mut(&(user_id.to_string(), name.to_string()))
            .ok_or_else(|| PlannerError::ShortlistNotFound {
                name: name.to_string(),
                user_id: user_id.to_string(),
            })?;
        for player in players {
            if !shortlist.players.contains(player) {
                shortlist.players.push(*player);
            }
        }
        Ok(())
    }
}
