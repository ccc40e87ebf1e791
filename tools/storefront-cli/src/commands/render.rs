//! Offline rendering of the listing page.

use std::convert::Infallible;
use std::fs;

use anyhow::{bail, Result};
use chrono::Utc;
use edge_core::RequestContext;
use edge_data::FetchClient;
use edge_observability::{LogFormat, LogLevel, StructuredLogger};
use edge_streaming::StreamingSink;
use product_listing::page::ListingPage;
use product_listing::params::{ListingParams, VIEWPORT_HINT_HEADER};
use product_listing::shell::{create_shell, page_title};
use product_listing::WORKLOAD_NAME;
use serde::Serialize;

use super::RenderArgs;
use crate::context::Context;
use crate::fixtures::FixtureTransport;
use crate::output::format_bytes;

/// Summary of one offline render.
#[derive(Debug, Serialize)]
struct RenderReport {
    path: String,
    request_url: String,
    sections: Vec<String>,
    bytes: usize,
    time_to_shell_ms: Option<f64>,
    total_ms: f64,
    total_products: u32,
    last_page: u32,
    listing_error: Option<String>,
    fixture_requests: Vec<String>,
    rendered_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
}

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let fixtures = ctx.resolve_path(&args.fixtures);
    if !fixtures.is_dir() {
        bail!("Fixture directory not found: {}", fixtures.display());
    }

    let mut request = RequestContext::new(http::Method::GET, &args.path);
    if let Some(width) = args.viewport_width {
        request = request.with_headers([(VIEWPORT_HINT_HEADER, width.to_string())]);
    }

    let logger = StructuredLogger::new(request.request_id.clone())
        .with_workload(WORKLOAD_NAME)
        .with_format(LogFormat::Human)
        .with_min_level(if ctx.output.is_verbose() {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        });

    let transport = FixtureTransport::new(&fixtures, ctx.config.api_base.clone());
    ctx.output
        .debug(&format!("Serving fixtures from {}", transport.root().display()));
    let client = FetchClient::new(transport);

    let params = ListingParams::from_context(&request);
    let shell = create_shell(&page_title(&params));
    let mut sink: StreamingSink<Vec<Vec<u8>>, Infallible> =
        StreamingSink::new(Vec::new(), request.timing.clone());

    sink.send_shell(&shell.render_opening()).await?;
    let page = ListingPage::load(params, &ctx.config, &client, &logger).await;
    page.stream(&mut sink, &shell).await?;

    let state = page.controller.state();
    let sections = sink.sections_sent().to_vec();
    let bytes = sink.bytes_sent();
    let time_to_shell = sink.timing().time_to_shell();
    let total = sink.timing().elapsed();
    let html = String::from_utf8_lossy(&sink.into_inner().concat()).into_owned();

    let mut report = RenderReport {
        path: args.path.clone(),
        request_url: page.request_url.clone(),
        sections,
        bytes,
        time_to_shell_ms: time_to_shell.map(|d| d.as_secs_f64() * 1000.0),
        total_ms: total.as_secs_f64() * 1000.0,
        total_products: state.total,
        last_page: page.controller.last_page_number(),
        listing_error: page.listing_error.as_ref().map(|e| e.to_string()),
        fixture_requests: client.transport().requests(),
        rendered_at: Utc::now().to_rfc3339(),
        html: None,
    };

    match &args.out {
        Some(out) => {
            let out = ctx.resolve_path(out);
            fs::write(&out, &html)?;
            ctx.output.success(&format!("Wrote {}", out.display()));
        }
        None if ctx.output.is_json() => report.html = Some(html),
        None => println!("{}", html),
    }

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Render summary");
    ctx.output.kv("request", &report.request_url);
    ctx.output.kv("sections", &report.sections.join(", "));
    ctx.output.kv("size", &format_bytes(report.bytes as u64));
    if let Some(ms) = report.time_to_shell_ms {
        ctx.output.kv("time to shell", &format!("{:.2} ms", ms));
    }
    ctx.output.kv("total", &format!("{:.2} ms", report.total_ms));
    ctx.output.kv(
        "pages",
        &format!("{} ({} products)", report.last_page, report.total_products),
    );
    for url in &report.fixture_requests {
        ctx.output.list_item(url);
    }
    if let Some(error) = &report.listing_error {
        ctx.output.warn(&format!("Listing fetch failed: {}", error));
    }

    Ok(())
}
