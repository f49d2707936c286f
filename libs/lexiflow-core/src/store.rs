//! Repository pattern for topics, words and game history.
//!
//! Grading and sessions never touch storage directly; callers go through
//! [`Library`], which works over any [`Repository`] implementation.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::StoreError;
use crate::import::ParsedWord;
use crate::types::{GameRecord, Topic, Word};

type Result<T> = std::result::Result<T, StoreError>;

/// A stored record with an ID and an optional owning parent.
pub trait Entity: Clone + Send + Sync {
    /// Name used in error messages.
    const KIND: &'static str;

    fn id(&self) -> Uuid;
    fn parent_id(&self) -> Option<Uuid>;

    /// Whether this record is owned by `parent_id`.
    fn belongs_to(&self, parent_id: Uuid) -> bool {
        self.parent_id() == Some(parent_id)
    }
}

impl Entity for Topic {
    const KIND: &'static str = "topic";

    fn id(&self) -> Uuid {
        self.id
    }

    fn parent_id(&self) -> Option<Uuid> {
        None
    }
}

impl Entity for Word {
    const KIND: &'static str = "word";

    fn id(&self) -> Uuid {
        self.id
    }

    fn parent_id(&self) -> Option<Uuid> {
        Some(self.topic_id)
    }
}

impl Entity for GameRecord {
    const KIND: &'static str = "game";

    fn id(&self) -> Uuid {
        self.id
    }

    /// First topic played; use [`Entity::belongs_to`] to match any of them.
    fn parent_id(&self) -> Option<Uuid> {
        self.topic_ids.first().copied()
    }

    fn belongs_to(&self, parent_id: Uuid) -> bool {
        self.topic_ids.contains(&parent_id)
    }
}

/// Keyed storage with lookup by parent ID.
pub trait Repository<T: Entity>: Send + Sync {
    fn get(&self, id: Uuid) -> Result<Option<T>>;
    fn get_by_parent(&self, parent_id: Uuid) -> Result<Vec<T>>;
    fn all(&self) -> Result<Vec<T>>;
    /// Insert or replace by ID.
    fn put(&self, entity: T) -> Result<()>;
    /// Returns whether a record was removed.
    fn delete(&self, id: Uuid) -> Result<bool>;
}

/// In-memory repository preserving insertion order.
#[derive(Debug)]
pub struct MemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Entity> Repository<T> for MemoryRepository<T> {
    fn get(&self, id: Uuid) -> Result<Option<T>> {
        let items = self.items.read().map_err(|_| StoreError::Poisoned)?;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    fn get_by_parent(&self, parent_id: Uuid) -> Result<Vec<T>> {
        let items = self.items.read().map_err(|_| StoreError::Poisoned)?;
        Ok(items
            .iter()
            .filter(|item| item.belongs_to(parent_id))
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<T>> {
        let items = self.items.read().map_err(|_| StoreError::Poisoned)?;
        Ok(items.clone())
    }

    fn put(&self, entity: T) -> Result<()> {
        let mut items = self.items.write().map_err(|_| StoreError::Poisoned)?;
        match items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(existing) => *existing = entity,
            None => items.push(entity),
        }
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<bool> {
        let mut items = self.items.write().map_err(|_| StoreError::Poisoned)?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        Ok(items.len() != before)
    }
}

/// Topic, word and game operations over injected repositories.
pub struct Library {
    topics: Box<dyn Repository<Topic>>,
    words: Box<dyn Repository<Word>>,
    games: Box<dyn Repository<GameRecord>>,
}

impl Library {
    pub fn new(
        topics: Box<dyn Repository<Topic>>,
        words: Box<dyn Repository<Word>>,
        games: Box<dyn Repository<GameRecord>>,
    ) -> Self {
        Self {
            topics,
            words,
            games,
        }
    }

    /// Library backed by in-memory repositories.
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(MemoryRepository::<Topic>::new()),
            Box::new(MemoryRepository::<Word>::new()),
            Box::new(MemoryRepository::<GameRecord>::new()),
        )
    }

    /// All topics, oldest first.
    pub fn topics(&self) -> Result<Vec<Topic>> {
        let mut topics = self.topics.all()?;
        topics.sort_by_key(|t| t.created_at);
        Ok(topics)
    }

    pub fn topic(&self, id: Uuid) -> Result<Topic> {
        self.topics.get(id)?.ok_or(StoreError::NotFound {
            kind: Topic::KIND,
            id,
        })
    }

    pub fn add_topic(&self, name: &str, now: DateTime<Utc>) -> Result<Topic> {
        let topic = Topic::new(name, now)?;
        self.topics.put(topic.clone())?;
        Ok(topic)
    }

    /// Delete a topic and its words. Game history is kept.
    ///
    /// Returns the number of words removed.
    pub fn delete_topic(&self, id: Uuid) -> Result<usize> {
        if !self.topics.delete(id)? {
            return Err(StoreError::NotFound {
                kind: Topic::KIND,
                id,
            });
        }

        let mut removed = 0;
        for word in self.words.get_by_parent(id)? {
            if self.words.delete(word.id)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    pub fn words(&self, topic_id: Uuid) -> Result<Vec<Word>> {
        self.words.get_by_parent(topic_id)
    }

    /// Words of several topics, in topic order.
    pub fn words_for_topics(&self, topic_ids: &[Uuid]) -> Result<Vec<Word>> {
        let mut words = Vec::new();
        for id in topic_ids {
            words.extend(self.words.get_by_parent(*id)?);
        }
        Ok(words)
    }

    pub fn word(&self, id: Uuid) -> Result<Word> {
        self.words.get(id)?.ok_or(StoreError::NotFound {
            kind: Word::KIND,
            id,
        })
    }

    /// Store a word after validating it and checking its topic exists.
    pub fn add_word(&self, word: Word) -> Result<Word> {
        word.validate()?;
        self.topic(word.topic_id)?;
        self.words.put(word.clone())?;
        Ok(word)
    }

    pub fn delete_word(&self, id: Uuid) -> Result<()> {
        if self.words.delete(id)? {
            Ok(())
        } else {
            Err(StoreError::NotFound {
                kind: Word::KIND,
                id,
            })
        }
    }

    /// Bump a word's hit or miss counter.
    pub fn record_word_result(&self, id: Uuid, correct: bool, now: DateTime<Utc>) -> Result<Word> {
        let mut word = self.word(id)?;
        word.record_result(correct, now);
        self.words.put(word.clone())?;
        Ok(word)
    }

    /// Add parsed words to a topic. Nothing is stored if any word is invalid.
    pub fn import_words(&self, topic_id: Uuid, parsed: &[ParsedWord]) -> Result<Vec<Word>> {
        self.topic(topic_id)?;

        let words = parsed
            .iter()
            .map(|p| Word::new(topic_id, p.term.as_str(), p.translation.as_str(), vec![]))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        for word in &words {
            self.words.put(word.clone())?;
        }
        Ok(words)
    }

    pub fn save_game(&self, record: GameRecord) -> Result<()> {
        self.games.put(record)
    }

    /// Game history, oldest first.
    pub fn games(&self) -> Result<Vec<GameRecord>> {
        let mut games = self.games.all()?;
        games.sort_by_key(|g| g.played_at);
        Ok(games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::GameMode;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn parsed(term: &str, translation: &str) -> ParsedWord {
        ParsedWord {
            term: term.to_string(),
            translation: translation.to_string(),
            line_number: 1,
        }
    }

    #[test]
    fn repository_put_replaces_by_id() {
        let repo = MemoryRepository::<Topic>::new();
        let mut topic = Topic::new("Food", Utc::now()).unwrap();
        repo.put(topic.clone()).unwrap();

        topic.name = "Drinks".to_string();
        repo.put(topic.clone()).unwrap();

        assert_eq!(repo.all().unwrap(), vec![topic.clone()]);
        assert_eq!(repo.get(topic.id).unwrap().unwrap().name, "Drinks");
    }

    #[test]
    fn repository_get_by_parent() {
        let repo = MemoryRepository::<Word>::new();
        let topic_a = Uuid::new_v4();
        let topic_b = Uuid::new_v4();
        repo.put(Word::new(topic_a, "cat", "gato", vec![]).unwrap()).unwrap();
        repo.put(Word::new(topic_b, "dog", "perro", vec![]).unwrap()).unwrap();
        repo.put(Word::new(topic_a, "cow", "vaca", vec![]).unwrap()).unwrap();

        let words = repo.get_by_parent(topic_a).unwrap();
        let terms: Vec<_> = words.iter().map(|w| w.term.as_str()).collect();
        assert_eq!(terms, vec!["cat", "cow"]);
    }

    #[test]
    fn repository_finds_multi_topic_game_by_any_topic() {
        let repo = MemoryRepository::<GameRecord>::new();
        let topic_a = Uuid::new_v4();
        let topic_b = Uuid::new_v4();
        let game = GameRecord {
            id: Uuid::new_v4(),
            played_at: Utc::now(),
            topic_ids: vec![topic_a, topic_b],
            mode: GameMode::Mixed,
            score: 20,
            total_time_secs: 30,
            answers: vec![],
        };
        repo.put(game.clone()).unwrap();

        assert_eq!(repo.get_by_parent(topic_a).unwrap(), vec![game.clone()]);
        assert_eq!(repo.get_by_parent(topic_b).unwrap(), vec![game]);
        assert!(repo.get_by_parent(Uuid::new_v4()).unwrap().is_empty());
    }

    #[test]
    fn repository_delete_reports_removal() {
        let repo = MemoryRepository::<Topic>::new();
        let topic = Topic::new("Food", Utc::now()).unwrap();
        repo.put(topic.clone()).unwrap();

        assert!(repo.delete(topic.id).unwrap());
        assert!(!repo.delete(topic.id).unwrap());
        assert!(repo.get(topic.id).unwrap().is_none());
    }

    #[test]
    fn topics_are_listed_oldest_first() {
        let library = Library::in_memory();
        let now = Utc::now();
        library.add_topic("Later", now).unwrap();
        library.add_topic("Earlier", now - Duration::days(1)).unwrap();

        let names: Vec<_> = library.topics().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Earlier", "Later"]);
    }

    #[test]
    fn delete_topic_cascades_words_but_keeps_games() {
        let library = Library::in_memory();
        let topic = library.add_topic("Animals", Utc::now()).unwrap();
        let other = library.add_topic("Food", Utc::now()).unwrap();
        library
            .import_words(topic.id, &[parsed("cat", "gato"), parsed("dog", "perro")])
            .unwrap();
        library.import_words(other.id, &[parsed("bread", "pan")]).unwrap();
        library
            .save_game(GameRecord {
                id: Uuid::new_v4(),
                played_at: Utc::now(),
                topic_ids: vec![topic.id],
                mode: GameMode::Mixed,
                score: 0,
                total_time_secs: 0,
                answers: vec![],
            })
            .unwrap();

        assert_eq!(library.delete_topic(topic.id).unwrap(), 2);
        assert!(library.words(topic.id).unwrap().is_empty());
        assert_eq!(library.words(other.id).unwrap().len(), 1);
        assert_eq!(library.games().unwrap().len(), 1);
        assert!(matches!(
            library.delete_topic(topic.id),
            Err(StoreError::NotFound { kind: "topic", .. })
        ));
    }

    #[test]
    fn add_word_requires_topic_and_valid_word() {
        let library = Library::in_memory();
        let orphan = Word::new(Uuid::new_v4(), "cat", "gato", vec![]).unwrap();
        assert!(matches!(
            library.add_word(orphan),
            Err(StoreError::NotFound { kind: "topic", .. })
        ));

        let topic = library.add_topic("Animals", Utc::now()).unwrap();
        let mut invalid = Word::new(topic.id, "cat", "gato", vec![]).unwrap();
        invalid.alternates.push(String::new());
        assert!(matches!(
            library.add_word(invalid),
            Err(StoreError::Invalid(ValidationError::EmptyAlternate { index: 0 }))
        ));
    }

    #[test]
    fn record_word_result_persists_counters() {
        let library = Library::in_memory();
        let topic = library.add_topic("Animals", Utc::now()).unwrap();
        let word = library
            .add_word(Word::new(topic.id, "cat", "gato", vec![]).unwrap())
            .unwrap();

        library.record_word_result(word.id, true, Utc::now()).unwrap();
        library.record_word_result(word.id, false, Utc::now()).unwrap();

        let stored = library.word(word.id).unwrap();
        assert_eq!((stored.hits, stored.misses), (1, 1));
        assert!(stored.last_reviewed.is_some());
    }

    #[test]
    fn import_rejects_unknown_topic() {
        let library = Library::in_memory();
        let result = library.import_words(Uuid::new_v4(), &[parsed("cat", "gato")]);
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn delete_missing_word_is_not_found() {
        let library = Library::in_memory();
        assert!(matches!(
            library.delete_word(Uuid::new_v4()),
            Err(StoreError::NotFound { kind: "word", .. })
        ));
    }
}
