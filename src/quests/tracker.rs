//! Quest tracker
//!
//! Quest records and their completion status for the current session.

use serde::{Deserialize, Serialize};

/// Faction that hands out a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    IronAssembly,
    FreeRangers,
    Arc,
}

impl Faction {
    pub fn name(&self) -> &'static str {
        match self {
            Faction::IronAssembly => "Iron Assembly",
            Faction::FreeRangers => "Free Rangers",
            Faction::Arc => "ARC",
        }
    }

    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Faction::IronAssembly => (248, 113, 113),
            Faction::FreeRangers => (74, 222, 128),
            Faction::Arc => (34, 211, 238),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuestStatus {
    #[default]
    Incomplete,
    Complete,
}

impl QuestStatus {
    /// The other status
    pub fn flipped(self) -> Self {
        match self {
            QuestStatus::Incomplete => QuestStatus::Complete,
            QuestStatus::Complete => QuestStatus::Incomplete,
        }
    }
}

/// A quest definition plus its current status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: QuestStatus,
    pub faction: Faction,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub rewards: Vec<String>,
}

impl Quest {
    pub fn is_complete(&self) -> bool {
        self.status == QuestStatus::Complete
    }
}

/// All quests known this session, in catalog order
#[derive(Debug, Clone, Default)]
pub struct QuestLog {
    quests: Vec<Quest>,
}

impl QuestLog {
    pub fn new(quests: Vec<Quest>) -> Self {
        Self { quests }
    }

    pub fn get(&self, id: u32) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn all(&self) -> &[Quest] {
        &self.quests
    }

    /// Flip a quest between complete and incomplete. Returns false for unknown IDs.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.quests.iter_mut().find(|q| q.id == id) {
            Some(quest) => {
                quest.status = quest.status.flipped();
                log::debug!("Quest {} is now {:?}", id, quest.status);
                true
            }
            None => false,
        }
    }

    pub fn in_progress(&self) -> Vec<&Quest> {
        self.quests.iter().filter(|q| !q.is_complete()).collect()
    }

    pub fn completed(&self) -> Vec<&Quest> {
        self.quests.iter().filter(|q| q.is_complete()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest(id: u32, status: QuestStatus) -> Quest {
        Quest {
            id,
            title: format!("Quest {}", id),
            description: String::new(),
            status,
            faction: Faction::FreeRangers,
            objectives: Vec::new(),
            rewards: Vec::new(),
        }
    }

    #[test]
    fn test_partition_keeps_order() {
        let log = QuestLog::new(vec![
            quest(1, QuestStatus::Incomplete),
            quest(2, QuestStatus::Complete),
            quest(3, QuestStatus::Incomplete),
        ]);
        let open: Vec<u32> = log.in_progress().iter().map(|q| q.id).collect();
        let done: Vec<u32> = log.completed().iter().map(|q| q.id).collect();
        assert_eq!(open, vec![1, 3]);
        assert_eq!(done, vec![2]);
    }

    #[test]
    fn test_toggle() {
        let mut log = QuestLog::new(vec![quest(1, QuestStatus::Incomplete)]);
        assert!(log.toggle(1));
        assert!(log.get(1).is_some_and(Quest::is_complete));
        assert!(log.toggle(1));
        assert!(!log.get(1).is_some_and(Quest::is_complete));
        assert!(!log.toggle(99));
    }
}
