//! Companion session state
//!
//! Owns everything the views work with and applies user actions to it.

use std::sync::Arc;

use crate::analysis::{AnalysisState, AnalysisTask, BuildAnalyst};
use crate::config::Config;
use crate::data::DataManager;
use crate::i18n::{Language, Translator};
use crate::items::Build;
use crate::progression::{AllocationError, SkillPlanner, Toggle};
use crate::quests::QuestLog;

const MAX_MESSAGES: usize = 100;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Main(View),
    Quit,
}

/// Views reachable from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    SkillTree,
    Builds,
    Quests,
}

impl View {
    pub const ALL: [View; 3] = [View::SkillTree, View::Builds, View::Quests];

    /// Translation key of the header label
    pub fn label_key(&self) -> &'static str {
        match self {
            View::SkillTree => "nav.skilltree",
            View::Builds => "nav.builds",
            View::Quests => "nav.quests",
        }
    }

    pub fn next(self) -> Self {
        match self {
            View::SkillTree => View::Builds,
            View::Builds => View::Quests,
            View::Quests => View::SkillTree,
        }
    }
}

/// A line in the message log
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    pub category: MessageCategory,
}

/// Categories for message coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    Info,
    Success,
    Warning,
}

pub struct Session {
    screen: Screen,
    translator: Translator,
    planner: SkillPlanner,
    quests: QuestLog,
    builds: Vec<Build>,
    selected_build: Option<usize>,
    analysis: AnalysisTask,
    messages: Vec<Message>,
}

impl Session {
    pub fn new(
        config: &Config,
        data: DataManager,
        translator: Translator,
        analyst: Arc<dyn BuildAnalyst>,
    ) -> Self {
        let selected_build = if data.builds.is_empty() { None } else { Some(0) };
        Self {
            screen: Screen::Welcome,
            translator,
            planner: SkillPlanner::new(data.skills, config.total_points),
            quests: QuestLog::new(data.quests),
            builds: data.builds,
            selected_build,
            analysis: AnalysisTask::new(analyst),
            messages: Vec::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn set_screen(&mut self, screen: Screen) {
        log::debug!("Screen transition: {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.set_screen(Screen::Quit);
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Shorthand for a translated string
    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    pub fn switch_language(&mut self) {
        let lang: Language = self.translator.language().toggled();
        self.translator.set_language(lang);
        let text = self.translator.t_args("header.language", &[("lang", lang.name())]);
        self.add_message(text, MessageCategory::Info);
    }

    pub fn planner(&self) -> &SkillPlanner {
        &self.planner
    }

    pub fn quests(&self) -> &QuestLog {
        &self.quests
    }

    pub fn builds(&self) -> &[Build] {
        &self.builds
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Add a message to the log
    pub fn add_message(&mut self, text: impl Into<String>, category: MessageCategory) {
        self.messages.push(Message {
            text: text.into(),
            category,
        });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn skill_name(&self, id: &str) -> String {
        self.planner
            .catalog()
            .get(id)
            .map(|node| node.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Unlock or relearn a skill, reporting the outcome in the message log
    pub fn toggle_skill(&mut self, id: &str) -> Result<Toggle, AllocationError> {
        let name = self.skill_name(id);
        let result = self.planner.toggle(id);
        let (key, category) = match &result {
            Ok(Toggle::Unlocked) => ("skills.unlocked", MessageCategory::Success),
            Ok(Toggle::Relearned) => ("skills.relearned", MessageCategory::Info),
            Err(AllocationError::DependencyConflict { .. }) => ("skills.conflict", MessageCategory::Warning),
            Err(AllocationError::Unavailable(_)) | Err(AllocationError::UnknownSkill(_)) => {
                ("skills.unavailable", MessageCategory::Warning)
            }
        };
        if let Err(e) = &result {
            log::debug!("Toggle rejected: {}", e);
        }
        let text = self.translator.t_args(key, &[("skill", name.as_str())]);
        self.add_message(text, category);
        result
    }

    pub fn reset_skills(&mut self) {
        self.planner.reset();
        let text = self.t("skills.reset");
        self.add_message(text, MessageCategory::Info);
    }

    pub fn grant_points(&mut self, points: u32) {
        self.planner.grant_points(points);
        let text = self
            .translator
            .t_args("skills.granted", &[("points", points.to_string().as_str())]);
        self.add_message(text, MessageCategory::Success);
    }

    /// Flip a quest between in progress and completed
    pub fn toggle_quest(&mut self, id: u32) -> bool {
        if !self.quests.toggle(id) {
            return false;
        }
        if let Some(quest) = self.quests.get(id) {
            let key = if quest.is_complete() {
                "quests.marked_complete"
            } else {
                "quests.marked_incomplete"
            };
            let text = self.translator.t_args(key, &[("quest", quest.title.as_str())]);
            self.add_message(text, MessageCategory::Info);
        }
        true
    }

    pub fn selected_build(&self) -> Option<&Build> {
        self.selected_build.and_then(|i| self.builds.get(i))
    }

    pub fn selected_build_index(&self) -> Option<usize> {
        self.selected_build
    }

    /// Select a build by index; clears any previous analysis
    pub fn select_build(&mut self, index: usize) {
        if index < self.builds.len() && self.selected_build != Some(index) {
            self.selected_build = Some(index);
            self.analysis.clear();
        }
    }

    pub fn analysis_state(&self) -> AnalysisState {
        self.analysis.state()
    }

    /// Ask for an analysis of the selected build. False if none is selected
    /// or a request is already running.
    pub fn analyze_selected_build(&mut self) -> bool {
        let Some(prompt) = self.selected_build().map(Build::analysis_prompt) else {
            return false;
        };
        if self.analysis.start(prompt) {
            return true;
        }
        let text = self.t("builds.busy");
        self.add_message(text, MessageCategory::Warning);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisError;
    use crate::progression::NodeState;

    struct Offline;

    /// Never answers, so a request stays pending
    struct Stalled(std::sync::Mutex<std::sync::mpsc::Receiver<()>>);

    impl BuildAnalyst for Stalled {
        fn analyze(&self, _prompt: &str) -> Result<String, AnalysisError> {
            let _ = self.0.lock().map(|rx| rx.recv());
            Err(AnalysisError::EmptyResponse)
        }
    }

    impl BuildAnalyst for Offline {
        fn analyze(&self, _prompt: &str) -> Result<String, AnalysisError> {
            Err(AnalysisError::MissingApiKey)
        }
    }

    fn session() -> Session {
        let config = Config {
            language: Language::En,
            ..Config::default()
        };
        let translator = Translator::bundled(Language::En).unwrap();
        Session::new(&config, DataManager::default(), translator, Arc::new(Offline))
    }

    #[test]
    fn test_starts_on_welcome() {
        let session = session();
        assert_eq!(session.screen(), Screen::Welcome);
        assert_eq!(session.planner().allocation().budget(), 20);
        assert_eq!(session.selected_build_index(), Some(0));
    }

    #[test]
    fn test_conflict_reported_as_warning() {
        let mut session = session();
        session.toggle_skill("core_systems").unwrap();
        session.toggle_skill("atk_up").unwrap();

        let err = session.toggle_skill("core_systems").unwrap_err();
        assert!(matches!(err, AllocationError::DependencyConflict { .. }));
        let last = session.messages().last().unwrap();
        assert_eq!(last.category, MessageCategory::Warning);
        assert_eq!(last.text, "Cannot unlearn Core Systems: other skills depend on it.");
        assert_eq!(session.planner().node_state("core_systems"), NodeState::Unlocked);
    }

    #[test]
    fn test_locked_skill_reported_as_warning() {
        let mut session = session();
        let err = session.toggle_skill("atk_up").unwrap_err();
        assert_eq!(err, AllocationError::Unavailable("atk_up".into()));
        let last = session.messages().last().unwrap();
        assert_eq!(last.category, MessageCategory::Warning);
        assert_eq!(last.text, "Weapon Overclock is not available yet.");
        assert_eq!(session.planner().allocation().spent(), 0);
    }

    #[test]
    fn test_quest_toggle_message() {
        let mut session = session();
        assert!(session.toggle_quest(1));
        assert_eq!(session.messages().last().unwrap().text, "X-Isle Extraction completed.");
        assert!(!session.toggle_quest(404));
    }

    #[test]
    fn test_select_build_bounds() {
        let mut session = session();
        session.select_build(2);
        assert_eq!(session.selected_build().map(|b| b.id), Some(3));
        session.select_build(99);
        assert_eq!(session.selected_build_index(), Some(2));
    }

    #[test]
    fn test_busy_analysis_reported() {
        let config = Config {
            language: Language::En,
            ..Config::default()
        };
        let (_tx, rx) = std::sync::mpsc::channel();
        let translator = Translator::bundled(Language::En).unwrap();
        let analyst = Arc::new(Stalled(std::sync::Mutex::new(rx)));
        let mut session = Session::new(&config, DataManager::default(), translator, analyst);

        assert!(session.analyze_selected_build());
        assert_eq!(session.analysis_state(), AnalysisState::Pending);
        assert!(!session.analyze_selected_build());
        let last = session.messages().last().unwrap();
        assert_eq!(last.category, MessageCategory::Warning);
        assert_eq!(last.text, "An analysis is already running.");

        // Switching builds abandons the old request and allows a new one
        session.select_build(1);
        assert_eq!(session.analysis_state(), AnalysisState::Idle);
        assert!(session.analyze_selected_build());
    }

    #[test]
    fn test_language_switch() {
        let mut session = session();
        assert_eq!(session.t("nav.quests"), "Quests");
        session.switch_language();
        assert_eq!(session.t("nav.quests"), "Oppdrag");
    }

    #[test]
    fn test_message_log_capped() {
        let mut session = session();
        for i in 0..150 {
            session.add_message(format!("m{}", i), MessageCategory::Info);
        }
        assert_eq!(session.messages().len(), MAX_MESSAGES);
        assert_eq!(session.messages()[0].text, "m50");
    }
}
