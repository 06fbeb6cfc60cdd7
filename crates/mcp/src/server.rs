use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        AnnotateAble, CallToolResult, Content, Implementation, ListResourcesResult,
        PaginatedRequestParam, ProtocolVersion, RawResource, ReadResourceRequestParam,
        ReadResourceResult, Resource, ResourceContents, ServerCapabilities, ServerInfo,
    },
    schemars::{self, JsonSchema},
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router, ErrorData, ServerHandler,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use frota_core::{FuelType, Transmission, VehicleFilter, VehicleRecord};
use frota_db::VehicleRepository;

/// Read-only resource URIs mirroring the two parameterless snapshots.
const RESOURCE_ALL_URI: &str = "vehicles://all";
const RESOURCE_BRANDS_URI: &str = "vehicles://brands";

pub struct CatalogMcpServer {
    catalog: Arc<dyn VehicleRepository>,
    tool_router: ToolRouter<Self>,
}

impl CatalogMcpServer {
    pub fn new(catalog: Arc<dyn VehicleRepository>) -> Self {
        Self { catalog, tool_router: Self::tool_router() }
    }

    async fn search_payload(&self, filter: &VehicleFilter) -> Result<CallToolResult, ErrorData> {
        tool_result(self.search_snapshot(filter).await?)
    }

    async fn search_snapshot(&self, filter: &VehicleFilter) -> Result<serde_json::Value, ErrorData> {
        let records = self
            .catalog
            .search(filter)
            .await
            .map_err(|error| ErrorData::internal_error(error.to_string(), None))?;
        Ok(vehicles_payload(&records))
    }

    async fn brands_snapshot(&self) -> Result<serde_json::Value, ErrorData> {
        let brands = self
            .catalog
            .distinct_brands()
            .await
            .map_err(|error| ErrorData::internal_error(error.to_string(), None))?;
        Ok(serde_json::json!({ "total": brands.len(), "brands": brands }))
    }

    async fn resource_contents(&self, uri: &str) -> Result<ResourceContents, ErrorData> {
        let payload = match uri {
            RESOURCE_ALL_URI => self.search_snapshot(&VehicleFilter::default()).await?,
            RESOURCE_BRANDS_URI => self.brands_snapshot().await?,
            other => {
                return Err(ErrorData::resource_not_found(
                    format!("unknown resource uri: {other}"),
                    None,
                ));
            }
        };
        let text = serde_json::to_string_pretty(&payload)
            .map_err(|error| ErrorData::internal_error(error.to_string(), None))?;
        Ok(ResourceContents::text(text, uri))
    }

    fn resource_listing() -> Vec<Resource> {
        vec![
            RawResource::new(RESOURCE_ALL_URI, "Full vehicle inventory").no_annotation(),
            RawResource::new(RESOURCE_BRANDS_URI, "Available vehicle brands").no_annotation(),
        ]
    }
}

/// Filter input where zero and empty values mean "no constraint", so
/// clients can pass a fully populated object without over-filtering.
#[derive(Debug, serde::Deserialize, JsonSchema)]
pub struct FilterSearchInput {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub color: Option<String>,
    pub fuel: Option<String>,
    pub transmission: Option<String>,
    pub doors: Option<u8>,
    pub mileage_max: Option<i64>,
    pub only_new: Option<bool>,
}

#[derive(Debug, serde::Deserialize, JsonSchema)]
pub struct BrandInput {
    pub brand: String,
}

/// Price window in BRL. A zero or missing bound means that side is open.
#[derive(Debug, serde::Deserialize, JsonSchema)]
pub struct PriceInput {
    pub min_price: Option<f64>,
    pub max_price: f64,
}

#[tool_router]
impl CatalogMcpServer {
    #[tool(
        name = "get_vehicles",
        description = "List every vehicle in the catalog with full details."
    )]
    async fn get_vehicles(&self) -> Result<CallToolResult, ErrorData> {
        debug!("get_vehicles called");
        self.search_payload(&VehicleFilter::default()).await
    }

    #[tool(
        name = "get_vehicles_by_filters",
        description = "Search vehicles by any combination of brand, model, year range, price \
                       range, color, fuel, transmission, doors, mileage, and new/used. Zero or \
                       empty values are ignored."
    )]
    async fn get_vehicles_by_filters(
        &self,
        Parameters(input): Parameters<FilterSearchInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let filter = to_filter(input)?;
        debug!(?filter, "get_vehicles_by_filters called");
        self.search_payload(&filter).await
    }

    #[tool(
        name = "get_available_brands",
        description = "List the distinct vehicle brands currently in the catalog."
    )]
    async fn get_available_brands(&self) -> Result<CallToolResult, ErrorData> {
        debug!("get_available_brands called");
        tool_result(self.brands_snapshot().await?)
    }

    #[tool(
        name = "get_vehicles_by_brand",
        description = "List vehicles whose brand matches the given name (case-insensitive \
                       substring match)."
    )]
    async fn get_vehicles_by_brand(
        &self,
        Parameters(input): Parameters<BrandInput>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(brand = %input.brand, "get_vehicles_by_brand called");
        let filter =
            VehicleFilter { brand: clean_text(Some(input.brand)), ..VehicleFilter::default() };
        self.search_payload(&filter).await
    }

    #[tool(
        name = "get_vehicles_by_price",
        description = "List vehicles inside a BRL price window. Omit or zero min_price to cap \
                       by maximum only."
    )]
    async fn get_vehicles_by_price(
        &self,
        Parameters(input): Parameters<PriceInput>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(?input.min_price, input.max_price, "get_vehicles_by_price called");
        let filter = VehicleFilter {
            price_min: to_price(input.min_price),
            price_max: to_price(Some(input.max_price)),
            ..VehicleFilter::default()
        };
        self.search_payload(&filter).await
    }
}

#[tool_handler]
impl ServerHandler for CatalogMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().enable_resources().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Vehicle catalog for a Brazilian dealership. Search the inventory by brand, \
                 model, year, price, color, fuel, or transmission; prices are in BRL. The \
                 vehicles://all and vehicles://brands resources expose full snapshots."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult { resources: Self::resource_listing(), next_cursor: None })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let contents = self.resource_contents(&uri).await?;
        Ok(ReadResourceResult { contents: vec![contents] })
    }
}

fn to_filter(input: FilterSearchInput) -> Result<VehicleFilter, ErrorData> {
    let fuel = match clean_text(input.fuel) {
        Some(token) => Some(parse_dimension::<FuelType>(&token)?),
        None => None,
    };
    let transmission = match clean_text(input.transmission) {
        Some(token) => Some(parse_dimension::<Transmission>(&token)?),
        None => None,
    };

    Ok(VehicleFilter {
        brand: clean_text(input.brand),
        model: clean_text(input.model),
        year_min: input.year_min.filter(|year| *year > 0),
        year_max: input.year_max.filter(|year| *year > 0),
        price_min: to_price(input.price_min),
        price_max: to_price(input.price_max),
        color: clean_text(input.color),
        fuel,
        transmission,
        doors: input.doors.filter(|doors| *doors > 0),
        mileage_max: input.mileage_max.filter(|mileage| *mileage > 0),
        only_new: input.only_new.filter(|only_new| *only_new),
    })
}

fn parse_dimension<T: std::str::FromStr<Err = frota_core::UnknownToken>>(
    token: &str,
) -> Result<T, ErrorData> {
    frota_core::text::normalize(token)
        .parse()
        .map_err(|error: frota_core::UnknownToken| ErrorData::invalid_params(error.to_string(), None))
}

fn clean_text(value: Option<String>) -> Option<String> {
    value.map(|text| text.trim().to_string()).filter(|text| !text.is_empty())
}

fn to_price(value: Option<f64>) -> Option<Decimal> {
    value
        .filter(|price| *price > 0.0)
        .and_then(Decimal::from_f64_retain)
        .map(|price| price.round_dp(2))
}

fn vehicles_payload(records: &[VehicleRecord]) -> serde_json::Value {
    let vehicles: Vec<serde_json::Value> = records.iter().map(vehicle_json).collect();
    serde_json::json!({ "total": vehicles.len(), "vehicles": vehicles })
}

fn vehicle_json(record: &VehicleRecord) -> serde_json::Value {
    serde_json::json!({
        "brand": record.brand,
        "model": record.model,
        "year": record.year,
        "color": record.color,
        "price": record.price.to_f64(),
        "mileage": record.mileage,
        "is_new": record.is_new,
        "docs_clear": record.docs_clear,
        "damaged": record.damaged,
        "vin": record.vin,
        "fuel": record.fuel.to_string(),
        "doors": record.doors,
        "transmission": record.transmission.to_string(),
    })
}

fn tool_result(payload: serde_json::Value) -> Result<CallToolResult, ErrorData> {
    let text = serde_json::to_string_pretty(&payload)
        .map_err(|error| ErrorData::internal_error(error.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rmcp::handler::server::wrapper::Parameters;
    use rmcp::model::{CallToolResult, ResourceContents};
    use serde_json::Value;

    use frota_core::{FuelType, Transmission};
    use frota_db::InMemoryVehicleRepository;

    use super::{to_filter, BrandInput, CatalogMcpServer, FilterSearchInput, PriceInput};

    fn demo_server() -> CatalogMcpServer {
        CatalogMcpServer::new(Arc::new(InMemoryVehicleRepository::with_demo_inventory()))
    }

    fn empty_input() -> FilterSearchInput {
        FilterSearchInput {
            brand: None,
            model: None,
            year_min: None,
            year_max: None,
            price_min: None,
            price_max: None,
            color: None,
            fuel: None,
            transmission: None,
            doors: None,
            mileage_max: None,
            only_new: None,
        }
    }

    fn payload(result: CallToolResult) -> Value {
        let text = result.content[0].as_text().expect("text content").text.clone();
        serde_json::from_str(&text).expect("payload should be valid JSON")
    }

    #[test]
    fn zero_and_empty_inputs_do_not_constrain_the_filter() {
        let filter = to_filter(FilterSearchInput {
            brand: Some("  ".to_string()),
            year_min: Some(0),
            price_max: Some(0.0),
            only_new: Some(false),
            ..empty_input()
        })
        .expect("filter");

        assert!(filter.is_unconstrained());
    }

    #[test]
    fn fuel_and_transmission_tokens_are_normalized_before_parsing() {
        let filter = to_filter(FilterSearchInput {
            fuel: Some("Elétrico".to_string()),
            transmission: Some("AUTOMÁTICO".to_string()),
            ..empty_input()
        })
        .expect("filter");

        assert_eq!(filter.fuel, Some(FuelType::Electric));
        assert_eq!(filter.transmission, Some(Transmission::Automatic));
    }

    #[test]
    fn unknown_fuel_token_is_an_invalid_params_error() {
        let result = to_filter(FilterSearchInput {
            fuel: Some("querosene".to_string()),
            ..empty_input()
        });
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn get_vehicles_returns_the_whole_catalog() {
        let result = demo_server().get_vehicles().await.expect("tool call");
        let payload = payload(result);
        assert_eq!(payload["total"], frota_db::SEED_VEHICLES.len());
        assert!(payload["vehicles"][0]["vin"].is_string());
    }

    #[tokio::test]
    async fn brand_tool_matches_case_insensitively() {
        let result = demo_server()
            .get_vehicles_by_brand(Parameters(BrandInput { brand: "toyota".to_string() }))
            .await
            .expect("tool call");
        let payload = payload(result);
        assert!(payload["total"].as_u64().unwrap_or(0) > 0);
        for vehicle in payload["vehicles"].as_array().expect("vehicles array") {
            assert_eq!(vehicle["brand"], "Toyota");
        }
    }

    #[tokio::test]
    async fn price_tool_caps_the_results() {
        let result = demo_server()
            .get_vehicles_by_price(Parameters(PriceInput { min_price: None, max_price: 80_000.0 }))
            .await
            .expect("tool call");
        let payload = payload(result);
        for vehicle in payload["vehicles"].as_array().expect("vehicles array") {
            assert!(vehicle["price"].as_f64().expect("price") <= 80_000.0);
        }
    }

    #[tokio::test]
    async fn price_tool_honors_both_window_bounds() {
        let result = demo_server()
            .get_vehicles_by_price(Parameters(PriceInput {
                min_price: Some(60_000.0),
                max_price: 100_000.0,
            }))
            .await
            .expect("tool call");
        let payload = payload(result);
        assert!(payload["total"].as_u64().unwrap_or(0) > 0);
        for vehicle in payload["vehicles"].as_array().expect("vehicles array") {
            let price = vehicle["price"].as_f64().expect("price");
            assert!((60_000.0..=100_000.0).contains(&price), "price out of window: {price}");
        }
    }

    #[tokio::test]
    async fn zero_min_price_leaves_the_lower_bound_open() {
        let result = demo_server()
            .get_vehicles_by_price(Parameters(PriceInput {
                min_price: Some(0.0),
                max_price: 60_000.0,
            }))
            .await
            .expect("tool call");
        let payload = payload(result);
        // the cheapest seed vehicles stay visible
        assert!(payload["total"].as_u64().unwrap_or(0) > 0);
    }

    #[tokio::test]
    async fn resources_expose_inventory_and_brand_snapshots() {
        let server = demo_server();

        let listing = CatalogMcpServer::resource_listing();
        let uris: Vec<&str> = listing.iter().map(|resource| resource.uri.as_str()).collect();
        assert_eq!(uris, ["vehicles://all", "vehicles://brands"]);

        let all = server.resource_contents("vehicles://all").await.expect("read all");
        let ResourceContents::TextResourceContents { text, .. } = all else {
            panic!("expected text contents");
        };
        let snapshot: Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(snapshot["total"], frota_db::SEED_VEHICLES.len());

        let brands = server.resource_contents("vehicles://brands").await.expect("read brands");
        let ResourceContents::TextResourceContents { text, .. } = brands else {
            panic!("expected text contents");
        };
        let snapshot: Value = serde_json::from_str(&text).expect("valid JSON");
        assert!(snapshot["brands"].as_array().expect("brands array").len() > 1);
    }

    #[tokio::test]
    async fn unknown_resource_uri_is_an_error() {
        let error = demo_server().resource_contents("vehicles://nope").await.unwrap_err();
        assert!(error.message.contains("unknown resource uri"));
    }

    #[tokio::test]
    async fn filter_tool_combines_dimensions() {
        let result = demo_server()
            .get_vehicles_by_filters(Parameters(FilterSearchInput {
                brand: Some("Volkswagen".to_string()),
                transmission: Some("manual".to_string()),
                ..empty_input()
            }))
            .await
            .expect("tool call");
        let payload = payload(result);
        assert_eq!(payload["total"], 1);
        assert_eq!(payload["vehicles"][0]["model"], "Gol");
    }
}
