//! In-Memory Travel Store
//!
//! Holds every collection in process memory. Nothing survives a restart.
//! Each collection sits behind its own lock and hands out sequential ids.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::seed::seed_destinations;
use crate::domain::chat::{ChatExchange, NewChatExchange};
use crate::domain::checklist::{Checklist, NewChecklist};
use crate::domain::currency::{ExchangeRate, SEED_RATES};
use crate::domain::destination::{Destination, DestinationFilter, NewDestination};
use crate::domain::foundation::{
    DomainError, ErrorCode, IdSequence, RecordId, Timestamp, UserId,
};
use crate::domain::itinerary::{Itinerary, NewItinerary};
use crate::domain::user::{NewUser, User};
use crate::ports::{
    ChatHistoryRepository, ChecklistRepository, DestinationCatalog, ExchangeRateRepository,
    ItineraryRepository, UserRepository,
};

/// Records keyed by their sequential id.
#[derive(Debug)]
struct Collection<T> {
    ids: IdSequence,
    items: BTreeMap<u32, T>,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            ids: IdSequence::new(),
            items: BTreeMap::new(),
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(u32) -> T) -> T {
        let id = self.ids.next_id();
        let record = build(id);
        self.items.insert(id, record.clone());
        record
    }

    fn filtered(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.items.values().filter(|r| keep(r)).cloned().collect()
    }
}

/// Exchange rates keyed by currency code.
#[derive(Debug)]
struct RateBook {
    ids: IdSequence,
    by_code: BTreeMap<String, ExchangeRate>,
}

impl RateBook {
    fn new() -> Self {
        Self {
            ids: IdSequence::new(),
            by_code: BTreeMap::new(),
        }
    }

    fn upsert(&mut self, code: &str, rate: f64) -> ExchangeRate {
        let now = Timestamp::now();
        if let Some(existing) = self.by_code.get_mut(code) {
            existing.rate = rate;
            existing.last_updated = now;
            return existing.clone();
        }
        let record = ExchangeRate {
            id: RecordId::new(self.ids.next_id()),
            currency_code: code.to_string(),
            rate,
            last_updated: now,
        };
        self.by_code.insert(code.to_string(), record.clone());
        record
    }
}

/// In-memory implementation of every store port.
#[derive(Debug, Clone)]
pub struct InMemoryTravelStore {
    users: Arc<RwLock<Collection<User>>>,
    destinations: Arc<RwLock<Collection<Destination>>>,
    itineraries: Arc<RwLock<Collection<Itinerary>>>,
    checklists: Arc<RwLock<Collection<Checklist>>>,
    chat: Arc<RwLock<Collection<ChatExchange>>>,
    rates: Arc<RwLock<RateBook>>,
}

impl InMemoryTravelStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::from_parts(
            Collection::new(),
            Collection::new(),
            RateBook::new(),
        )
    }

    /// A store holding the demo user, the destination catalog and the
    /// nine seed exchange rates.
    pub fn seeded() -> Self {
        let mut users = Collection::new();
        let demo = NewUser::demo();
        users.insert_with(|id| User {
            id: UserId::new(id),
            username: demo.username,
            email: demo.email,
            created_at: Timestamp::now(),
        });

        let mut destinations = Collection::new();
        for destination in seed_destinations() {
            destinations.insert_with(|id| destination.with_id(RecordId::new(id)));
        }

        let mut rates = RateBook::new();
        for (code, rate) in SEED_RATES {
            rates.upsert(code, rate);
        }

        Self::from_parts(users, destinations, rates)
    }

    fn from_parts(
        users: Collection<User>,
        destinations: Collection<Destination>,
        rates: RateBook,
    ) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            destinations: Arc::new(RwLock::new(destinations)),
            itineraries: Arc::new(RwLock::new(Collection::new())),
            checklists: Arc::new(RwLock::new(Collection::new())),
            chat: Arc::new(RwLock::new(Collection::new())),
            rates: Arc::new(RwLock::new(rates)),
        }
    }
}

impl Default for InMemoryTravelStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryTravelStore {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.items.values().any(|u| u.username == user.username) {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("username '{}' is taken", user.username),
            ));
        }
        Ok(users.insert_with(|id| User {
            id: UserId::new(id),
            username: user.username,
            email: user.email,
            created_at: Timestamp::now(),
        }))
    }

    async fn find(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.items.get(&id.value()).cloned())
    }
}

#[async_trait]
impl DestinationCatalog for InMemoryTravelStore {
    async fn search(&self, filter: &DestinationFilter) -> Result<Vec<Destination>, DomainError> {
        Ok(self.destinations.read().await.filtered(|d| filter.matches(d)))
    }

    async fn add(&self, destination: NewDestination) -> Result<Destination, DomainError> {
        let mut destinations = self.destinations.write().await;
        Ok(destinations.insert_with(|id| destination.with_id(RecordId::new(id))))
    }
}

#[async_trait]
impl ExchangeRateRepository for InMemoryTravelStore {
    async fn list(&self) -> Result<Vec<ExchangeRate>, DomainError> {
        Ok(self.rates.read().await.by_code.values().cloned().collect())
    }

    async fn find(&self, currency_code: &str) -> Result<Option<ExchangeRate>, DomainError> {
        Ok(self.rates.read().await.by_code.get(currency_code).cloned())
    }

    async fn upsert(&self, currency_code: &str, rate: f64) -> Result<ExchangeRate, DomainError> {
        Ok(self.rates.write().await.upsert(currency_code, rate))
    }
}

#[async_trait]
impl ItineraryRepository for InMemoryTravelStore {
    async fn create(&self, itinerary: NewItinerary) -> Result<Itinerary, DomainError> {
        let mut itineraries = self.itineraries.write().await;
        Ok(itineraries.insert_with(|id| Itinerary {
            id: RecordId::new(id),
            user_id: itinerary.user_id,
            main_destination: itinerary.main_destination,
            other_destinations: itinerary.other_destinations,
            start_date: itinerary.start_date,
            end_date: itinerary.end_date,
            interests: itinerary.interests,
            preferences: itinerary.preferences,
            itinerary_data: itinerary.itinerary_data,
            created_at: Timestamp::now(),
        }))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Itinerary>, DomainError> {
        Ok(self.itineraries.read().await.filtered(|i| i.user_id == user_id))
    }
}

#[async_trait]
impl ChecklistRepository for InMemoryTravelStore {
    async fn create(&self, checklist: NewChecklist) -> Result<Checklist, DomainError> {
        let NewChecklist {
            user_id,
            request,
            items,
        } = checklist;
        let mut checklists = self.checklists.write().await;
        Ok(checklists.insert_with(|id| Checklist {
            id: RecordId::new(id),
            user_id,
            destination: request.destination,
            climate: request.climate,
            duration: request.duration,
            trip_type: request.trip_type,
            confirmed_items: request.confirmed_items,
            checklist_data: items,
            created_at: Timestamp::now(),
        }))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Checklist>, DomainError> {
        Ok(self.checklists.read().await.filtered(|c| c.user_id == user_id))
    }
}

#[async_trait]
impl ChatHistoryRepository for InMemoryTravelStore {
    async fn append(&self, exchange: NewChatExchange) -> Result<ChatExchange, DomainError> {
        let mut chat = self.chat.write().await;
        Ok(chat.insert_with(|id| ChatExchange {
            id: RecordId::new(id),
            user_id: exchange.user_id,
            content: exchange.content,
            is_user: exchange.is_user,
            timestamp: Timestamp::now(),
        }))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<ChatExchange>, DomainError> {
        Ok(self.chat.read().await.filtered(|m| m.user_id == user_id))
    }
}
