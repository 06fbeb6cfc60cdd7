use std::sync::Arc;

use async_trait::async_trait;

use frota_agent::AgentRuntime;
use frota_core::{VehicleFilter, VehicleRecord};
use frota_db::{InMemoryVehicleRepository, RepositoryError, VehicleRepository};

fn demo_runtime() -> AgentRuntime {
    AgentRuntime::new(Arc::new(InMemoryVehicleRepository::with_demo_inventory()))
}

#[tokio::test]
async fn brand_and_year_query_lists_matching_vehicles() {
    let reply = demo_runtime().handle_turn("quero um nissan 2022").await;

    assert!(reply.contains("Nissan"));
    assert!(reply.contains("2022"));
    assert!(reply.starts_with("Encontrei"));
    assert!(reply.contains("Algum desses te interessou?"));
}

#[tokio::test]
async fn budget_query_respects_the_price_cap() {
    let reply = demo_runtime().handle_turn("tem ford até 80 mil?").await;

    assert!(reply.contains("Ford Ka"));
    assert!(!reply.contains("Ranger"));
}

#[tokio::test]
async fn brand_listing_triggers_on_accented_question() {
    let reply = demo_runtime().handle_turn("Quais marcas vocês têm?").await;

    assert!(reply.starts_with("Temos estas marcas disponíveis:"));
    assert!(reply.contains("Toyota"));
    assert!(reply.contains("Volkswagen"));
}

#[tokio::test]
async fn full_inventory_request_lists_at_most_five() {
    let reply = demo_runtime().handle_turn("me mostra todos os carros").await;

    assert!(reply.starts_with("Encontrei"));
    assert!(reply.contains("opções disponíveis!"));
    let numbered = reply.lines().filter(|line| line.starts_with(char::is_numeric)).count();
    assert_eq!(numbered, 5);
}

#[tokio::test]
async fn unintelligible_input_gets_usage_help() {
    let reply = demo_runtime().handle_turn("xyz123").await;

    assert!(reply.contains("Não entendi"));
}

#[tokio::test]
async fn empty_catalog_yields_no_match_reply() {
    let runtime = AgentRuntime::new(Arc::new(InMemoryVehicleRepository::default()));
    let reply = runtime.handle_turn("quero um toyota").await;

    assert_eq!(reply, "Não encontrei veículos com esses critérios. Que tal tentar outros filtros?");
}

#[tokio::test]
async fn catalog_failure_degrades_to_apology() {
    struct FailingCatalog;

    #[async_trait]
    impl VehicleRepository for FailingCatalog {
        async fn search(
            &self,
            _filter: &VehicleFilter,
        ) -> Result<Vec<VehicleRecord>, RepositoryError> {
            Err(RepositoryError::Decode("catalog offline".to_string()))
        }

        async fn distinct_brands(&self) -> Result<Vec<String>, RepositoryError> {
            Err(RepositoryError::Decode("catalog offline".to_string()))
        }
    }

    let runtime = AgentRuntime::new(Arc::new(FailingCatalog));

    let search_reply = runtime.handle_turn("quero um honda").await;
    assert_eq!(search_reply, "Desculpe, tive um problema ao consultar o estoque. Pode tentar novamente?");

    let brands_reply = runtime.handle_turn("quais marcas vocês têm?").await;
    assert_eq!(brands_reply, "Desculpe, tive um problema ao consultar o estoque. Pode tentar novamente?");
}
