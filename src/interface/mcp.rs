//! MCP Server for shelf-mcp
//!
//! MCP Protocol (stdio) <-> application::LibraryService
//!
//! 5 tools: add_book, remove_book, search_books, list_books, statistics

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::{
    handler::server::{tool::ToolCallContext, tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolRequestParams, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
    transport::stdio,
    ErrorData as McpError, ServerHandler, ServiceExt,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::application::error::AppError;
use crate::application::service::LibraryService;
use crate::domain::model::book::{AddBookRequest, SearchField};
use crate::infra::json_store::JsonLibraryRepository;

use super::text;

// =============================================================================
// Public entry point
// =============================================================================

/// MCP Serverを起動する。library_pathは蔵書ファイル。
pub async fn run(library_path: PathBuf) -> anyhow::Result<()> {
    let server = LibraryMcpServer::new(library_path);
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}

// =============================================================================
// MCP Server
// =============================================================================

#[derive(Clone)]
struct LibraryMcpServer {
    library: Arc<Mutex<LibraryService<JsonLibraryRepository>>>,
    tool_router: ToolRouter<Self>,
}

impl LibraryMcpServer {
    fn new(library_path: PathBuf) -> Self {
        let repo = JsonLibraryRepository::new(library_path);
        tracing::info!(path = %repo.path().display(), "opening library");
        Self {
            library: Arc::new(Mutex::new(LibraryService::open(repo))),
            tool_router: Self::tool_router(),
        }
    }

    fn service(&self) -> Result<MutexGuard<'_, LibraryService<JsonLibraryRepository>>, McpError> {
        self.library
            .lock()
            .map_err(|_| McpError::internal_error("Lock poisoned", None))
    }

    /// 入力起因のエラーはinvalid_params、保存失敗はinternal_error。
    fn to_mcp_error(e: AppError) -> McpError {
        match e {
            AppError::Domain(_) => McpError::invalid_params(format!("{e}"), None),
            AppError::Storage(_) => McpError::internal_error(format!("{e}"), None),
        }
    }
}

// =============================================================================
// ServerHandler impl
// =============================================================================

impl ServerHandler for LibraryMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "shelf-mcp".to_string(),
                title: Some("Shelf MCP — Personal Book Library".to_string()),
                description: Some(
                    "A small personal book collection: add, remove, search, list, statistics."
                        .to_string(),
                ),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Manage a personal reading list.\n\
                 \n\
                 Titles are matched exactly, ignoring case and surrounding spaces. \
                 `remove_book` removes only the first book with a matching title.\n\
                 \n\
                 Tools: `add_book`, `remove_book`, `search_books`, `list_books`, `statistics`."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let tool_ctx = ToolCallContext::new(self, request, context);
        self.tool_router.call(tool_ctx).await
    }
}

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpAddBookRequest {
    #[schemars(description = "Book title (required)")]
    pub title: String,
    #[schemars(description = "Author name (required)")]
    pub author: String,
    #[schemars(description = "Publication year, 1000-9999 (required)")]
    pub year: Option<i32>,
    #[schemars(description = "Genre (required)")]
    pub genre: String,
    #[schemars(description = "Whether the book has been read (default: false)")]
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpRemoveBookRequest {
    #[schemars(description = "Title of the book to remove (case-insensitive, exact)")]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpSearchRequest {
    #[schemars(description = "Exact title or author to look for (case-insensitive)")]
    pub query: String,
    #[schemars(description = "Field to search: 'title' (default) or 'author'")]
    pub field: Option<SearchField>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpListRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpStatisticsRequest {}

// =============================================================================
// Tool implementations
// =============================================================================

#[tool_router]
impl LibraryMcpServer {
    #[tool(
        name = "add_book",
        description = "Add a book to the library. Title, author, genre and a year between 1000 and 9999 are required. Duplicate titles are allowed.",
        annotations(
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    async fn add_book(
        &self,
        Parameters(req): Parameters<McpAddBookRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut svc = self.service()?;
        let book = svc
            .add_book(AddBookRequest {
                title: req.title,
                author: req.author,
                year: req.year,
                genre: req.genre,
                read: req.read,
            })
            .map_err(Self::to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Added: '{}' by {}",
            book.title(),
            book.author()
        ))]))
    }

    #[tool(
        name = "remove_book",
        description = "Remove a book by title. Matching ignores case and surrounding spaces; only the first matching book is removed.",
        annotations(
            read_only_hint = false,
            destructive_hint = true,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    async fn remove_book(
        &self,
        Parameters(req): Parameters<McpRemoveBookRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut svc = self.service()?;
        let removed = svc.remove_book(&req.title).map_err(Self::to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Removed: '{}'",
            removed.title()
        ))]))
    }

    #[tool(
        name = "search_books",
        description = "Find books whose title or author equals the query, ignoring case and surrounding spaces. Not a substring search.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            open_world_hint = false
        )
    )]
    async fn search_books(
        &self,
        Parameters(req): Parameters<McpSearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        if req.query.trim().is_empty() {
            return Err(McpError::invalid_params("query must not be empty", None));
        }
        let field = req.field.unwrap_or(SearchField::Title);

        let svc = self.service()?;
        let results = svc.search_books(&req.query, field);
        Ok(CallToolResult::success(vec![Content::text(
            text::render_search_results(&results),
        )]))
    }

    #[tool(
        name = "list_books",
        description = "List every book in the library in the order they were added.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            open_world_hint = false
        )
    )]
    async fn list_books(
        &self,
        #[allow(unused_variables)] Parameters(_req): Parameters<McpListRequest>,
    ) -> Result<CallToolResult, McpError> {
        let svc = self.service()?;
        Ok(CallToolResult::success(vec![Content::text(
            text::render_listing(svc.list_books()),
        )]))
    }

    #[tool(
        name = "statistics",
        description = "Show how many books are in the library and what share of them has been read.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            open_world_hint = false
        )
    )]
    async fn statistics(
        &self,
        #[allow(unused_variables)] Parameters(_req): Parameters<McpStatisticsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let svc = self.service()?;
        let stats = svc.compute_statistics();
        Ok(CallToolResult::success(vec![Content::text(
            text::render_statistics(&stats),
        )]))
    }
}

// =============================================================================
// Tests
// =============================================================================
