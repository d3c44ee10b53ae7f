//! Shared state for all routes.

use std::sync::Arc;

use crate::adapters::storage::InMemoryTravelStore;
use crate::application::handlers::chat::{ChatSettings, SendChatMessageHandler};
use crate::application::handlers::checklist::{GenerateChecklistHandler, ListUserChecklistsHandler};
use crate::application::handlers::currency::{
    ConvertCurrencyHandler, GetDolarRateHandler, GetExchangeRatesHandler,
};
use crate::application::handlers::destination::SearchDestinationsHandler;
use crate::application::handlers::itinerary::{
    GenerateItineraryHandler, ListUserItinerariesHandler,
};
use crate::domain::foundation::UserId;
use crate::ports::{
    AIProvider, ChatHistoryRepository, ChecklistRepository, DestinationCatalog,
    ExchangeRateRepository, ItineraryRepository, StructuredGenerator,
};

/// Ports behind every route. Handlers are built per request.
#[derive(Clone)]
pub struct TravelAppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub generator: Arc<dyn StructuredGenerator>,
    pub destinations: Arc<dyn DestinationCatalog>,
    pub exchange_rates: Arc<dyn ExchangeRateRepository>,
    pub itineraries: Arc<dyn ItineraryRepository>,
    pub checklists: Arc<dyn ChecklistRepository>,
    pub chat_history: Arc<dyn ChatHistoryRepository>,
    pub chat_settings: ChatSettings,
    /// Owner of generated records until sessions exist.
    pub current_user: UserId,
}

impl TravelAppState {
    /// Wires every store port to one in-memory store.
    pub fn with_store(
        store: InMemoryTravelStore,
        ai_provider: Arc<dyn AIProvider>,
        generator: Arc<dyn StructuredGenerator>,
    ) -> Self {
        let store = Arc::new(store);
        Self {
            ai_provider,
            generator,
            destinations: store.clone(),
            exchange_rates: store.clone(),
            itineraries: store.clone(),
            checklists: store.clone(),
            chat_history: store,
            chat_settings: ChatSettings::default(),
            current_user: UserId::DEMO,
        }
    }

    pub fn with_chat_settings(mut self, settings: ChatSettings) -> Self {
        self.chat_settings = settings;
        self
    }

    pub fn send_chat_message_handler(&self) -> SendChatMessageHandler {
        SendChatMessageHandler::new(
            self.ai_provider.clone(),
            self.chat_history.clone(),
            self.chat_settings,
        )
    }

    pub fn generate_itinerary_handler(&self) -> GenerateItineraryHandler {
        GenerateItineraryHandler::new(self.generator.clone(), self.itineraries.clone())
    }

    pub fn generate_checklist_handler(&self) -> GenerateChecklistHandler {
        GenerateChecklistHandler::new(self.generator.clone(), self.checklists.clone())
    }

    pub fn get_exchange_rates_handler(&self) -> GetExchangeRatesHandler {
        GetExchangeRatesHandler::new(self.exchange_rates.clone())
    }

    pub fn convert_currency_handler(&self) -> ConvertCurrencyHandler {
        ConvertCurrencyHandler::new(self.exchange_rates.clone())
    }

    pub fn get_dolar_rate_handler(&self) -> GetDolarRateHandler {
        GetDolarRateHandler::new(self.exchange_rates.clone())
    }

    pub fn search_destinations_handler(&self) -> SearchDestinationsHandler {
        SearchDestinationsHandler::new(self.destinations.clone())
    }

    pub fn list_user_itineraries_handler(&self) -> ListUserItinerariesHandler {
        ListUserItinerariesHandler::new(self.itineraries.clone())
    }

    pub fn list_user_checklists_handler(&self) -> ListUserChecklistsHandler {
        ListUserChecklistsHandler::new(self.checklists.clone())
    }
}
