//! MCP Server implementation
//!
//! Line-delimited JSON-RPC 2.0 over any buffered reader/writer pair,
//! stdin/stdout by default.

mod handlers;

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool, PROTOCOL_VERSION,
};
use crate::types::McpResult;

pub use handlers::*;

/// MCP Server that handles JSON-RPC communication
pub struct McpServer<R = BufReader<io::Stdin>, W = BufWriter<io::Stdout>> {
    server_info: ServerInfo,
    tools: HashMap<String, Box<dyn Tool>>,
    reader: R,
    writer: W,
}

impl McpServer {
    /// Create a stdio server with default server info
    pub fn new() -> Self {
        Self::with_info(ServerInfo::default())
    }

    /// Create a stdio server with custom server info
    pub fn with_info(info: ServerInfo) -> Self {
        Self::with_io(info, BufReader::new(io::stdin()), BufWriter::new(io::stdout()))
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> McpServer<R, W> {
    /// Create a server over an arbitrary reader/writer pair
    pub fn with_io(server_info: ServerInfo, reader: R, writer: W) -> Self {
        Self {
            server_info,
            tools: HashMap::new(),
            reader,
            writer,
        }
    }

    /// Register a tool with the server
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.name();
        self.tools.insert(name, tool);
        self
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Consume the server and return its writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run until the reader is exhausted
    pub fn run(&mut self) -> McpResult<()> {
        info!(
            name = %self.server_info.name,
            tools = self.tools.len(),
            "MCP server started"
        );
        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                self.handle_request(trimmed)?;
            }
            line.clear();
        }
        info!("Input closed, MCP server stopping");
        Ok(())
    }

    /// Handle a single JSON-RPC request line
    pub fn handle_request(&mut self, request_str: &str) -> McpResult<()> {
        let request: JsonRpcRequest = match serde_json::from_str(request_str) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "Unparseable request");
                return self.send(&JsonRpcError::parse_error(e.to_string()));
            }
        };

        let id = request.id.clone().unwrap_or(Value::Null);
        if !request.is_valid() {
            return self.send(&JsonRpcError::invalid_request(id, "jsonrpc must be '2.0'"));
        }

        debug!(method = %request.method, "Request");
        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "notifications/initialized" => Ok(()),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => self.send(&JsonRpcResponse::new(id, json!({}))),
            _ if request.is_notification() => Ok(()),
            method => self.send(&JsonRpcError::method_not_found(id, method)),
        }
    }

    fn handle_initialize(&mut self, id: Value) -> McpResult<()> {
        let result = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        });
        self.send(&JsonRpcResponse::new(id, result))
    }

    fn handle_tools_list(&mut self, id: Value) -> McpResult<()> {
        let mut tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        self.send(&JsonRpcResponse::new(id, json!({ "tools": tools })))
    }

    fn handle_tool_call(&mut self, id: Value, params: Option<Value>) -> McpResult<()> {
        let params = match params {
            Some(params) => params,
            None => return self.send(&JsonRpcError::invalid_params(id, "Missing parameters")),
        };
        let tool_name = match extract_tool_name(&params) {
            Some(name) => name,
            None => return self.send(&JsonRpcError::invalid_params(id, "Missing tool name")),
        };

        let outcome = match self.tools.get(tool_name) {
            Some(tool) => tool.execute(extract_arguments(&params)),
            None => return self.send(&JsonRpcError::unknown_tool(id, tool_name)),
        };

        match outcome {
            Ok(result) => self.send(&JsonRpcResponse::new(id, result)),
            Err(e) => {
                warn!(tool = tool_name, error = %e, "Tool execution failed");
                self.send(&JsonRpcError::tool_error(id, e.to_string()))
            }
        }
    }

    fn send<T: Serialize>(&mut self, message: &T) -> McpResult<()> {
        let json = serde_json::to_string(message)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}
