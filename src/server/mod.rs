//! Server-side API backend and content composition.
//!
//! This module contains the backend of the site: the JSON API, the locale
//! middleware wrapped around every page request, and the read path from the
//! content store to renderable DTOs. The backend uses Axum as the web framework
//! and reads all editable content from the content store's GROQ query API.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and OpenAPI annotations
//! - **Service Layer** (`service/`) - Locale resolution, fallbacks and composition
//! - **Data Layer** (`data/`) - GROQ queries and the content store client
//! - **Model Layer** (`model/`) - Content store documents and their conversion to DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Locale prefix redirects and cookies
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (content client, locale cache)
//! - **Startup** (`startup`) - Initialization of HTTP and content clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Middleware** redirects unlocalized page paths and remembers the locale
//! 2. **Router** sends API requests to a controller; page requests go to the Dioxus app
//! 3. **Controller** extracts parameters and calls a service
//! 4. **Service** resolves the locale and fetches documents through repositories
//! 5. **Model** converts documents into DTOs, dropping anything unrenderable
//! 6. **Controller** returns the DTO as JSON
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
