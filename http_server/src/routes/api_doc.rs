use actix_web::web;
use prayer_times::contracts::{DEFAULT_LANGUAGE, DEFAULT_LOCALITY_NAME};
use serde_json::{json, Value};

/// OpenAPI 3 description of every endpoint, served at `/swagger.json`.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Prayer Times API",
            "version": "1.0",
            "description": "A simple API to fetch prayer times, countries, cities, and districts data."
        },
        "paths": {
            "/get-countries": {
                "get": {
                    "tags": ["regions"],
                    "summary": "List all countries",
                    "operationId": "list_countries",
                    "responses": {
                        "200": regions_response("Countries in catalog order, id equal to name")
                    }
                }
            },
            "/get-cities": {
                "get": {
                    "tags": ["regions"],
                    "summary": "List the cities of a country",
                    "operationId": "list_cities",
                    "parameters": [
                        query_parameter("country", "Country name as listed by /get-countries", None)
                    ],
                    "responses": {
                        "200": regions_response("Cities of the country in catalog order"),
                        "400": error_response("Missing or unknown country")
                    }
                }
            },
            "/get-districts": {
                "get": {
                    "tags": ["regions"],
                    "summary": "List the districts of a city",
                    "operationId": "list_districts",
                    "parameters": [
                        query_parameter("country", "Country name as listed by /get-countries", None),
                        query_parameter("cityId", "City id as listed by /get-cities", None)
                    ],
                    "responses": {
                        "200": regions_response("Districts of the city in catalog order"),
                        "400": error_response("Missing or unknown country or city")
                    }
                }
            },
            "/namaz-vakitleri": {
                "get": prayer_times_operation()
            }
        },
        "components": {
            "schemas": {
                "Region": {
                    "type": "object",
                    "required": ["id", "name"],
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" }
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["error"],
                    "properties": {
                        "error": { "type": "string" }
                    }
                }
            }
        }
    })
}

fn prayer_times_operation() -> Value {
    json!({
        "tags": ["prayer-times"],
        "summary": "Today's prayer times of a locality",
        "operationId": "get_prayer_times",
        "parameters": [
            query_parameter("sehir", "Locality name as used by the upstream site", Some(DEFAULT_LOCALITY_NAME)),
            query_parameter("sehirId", "Locality id as used by the upstream site", None),
            query_parameter("dil", "Label language: tr, en or ar", Some(DEFAULT_LANGUAGE))
        ],
        "responses": {
            "200": {
                "description": "Prayer time label to time text, in page order",
                "content": {
                    "application/json": {
                        "schema": {
                            "type": "object",
                            "additionalProperties": { "type": "string" }
                        },
                        "example": { "Fajr": "05:12", "Sunrise": "06:41" }
                    }
                }
            },
            "400": error_response("Blank locality name or missing locality id"),
            "404": error_response("The page holds no prayer times for today"),
            "500": error_response("The upstream site could not be reached")
        }
    })
}

fn query_parameter(name: &str, description: &str, default: Option<&str>) -> Value {
    let mut schema = json!({ "type": "string" });
    if let Some(default) = default {
        schema["default"] = json!(default);
    }
    json!({
        "name": name,
        "in": "query",
        "required": false,
        "description": description,
        "schema": schema
    })
}

fn regions_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": {
                    "type": "array",
                    "items": { "$ref": "#/components/schemas/Region" }
                }
            }
        }
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/Error" }
            }
        }
    })
}

#[tracing::instrument(level = "info")]
async fn swagger_json() -> web::Json<Value> {
    web::Json(openapi_document())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/swagger.json").route(web::get().to(swagger_json)));
}
