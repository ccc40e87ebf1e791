//! Spin HTTP entry point.

use anyhow::anyhow;
use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use edge_core::{RequestContext, RequestId, RouteMatch, StorefrontConfig};
use edge_data::{FetchClient, SpinTransport};
use edge_observability::StructuredLogger;
use edge_streaming::StreamingSink;

use crate::actions::{self, ActionResponse};
use crate::page::ListingPage;
use crate::params::{ListingParams, VIEWPORT_HINT_HEADER};
use crate::shell::{create_shell, page_title};
use crate::{handlers, load_config, manifest, report_failure, WORKLOAD_NAME};

/// Product listing handler.
#[http_component]
async fn handle_product_listing(req: IncomingRequest, response_out: ResponseOutparam) {
    let Some(method) = to_http_method(&req.method()) else {
        let logger = StructuredLogger::new(RequestId::generate()).with_workload(WORKLOAD_NAME);
        let result = respond(response_out, ActionResponse::plain(405, "Method Not Allowed")).await;
        report_failure(&logger, result);
        return;
    };

    let path_with_query = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let headers = req
        .headers()
        .entries()
        .into_iter()
        .map(|(k, v)| (k, String::from_utf8_lossy(&v).into_owned()));
    let ctx = RequestContext::new(method, &path_with_query).with_headers(headers);

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD_NAME)
        .with_route(ctx.path.clone());

    let result = dispatch(req, ctx, &logger, response_out).await;
    report_failure(&logger, result);
}

async fn dispatch(
    req: IncomingRequest,
    ctx: RequestContext,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    let config = load_config(|key| spin_sdk::variables::get(key).ok()).unwrap_or_else(|e| {
        logger
            .warn_builder("Invalid configuration, using defaults")
            .field("error", e.to_string())
            .emit();
        StorefrontConfig::default()
    });

    let manifest = manifest();
    let handler = match manifest.resolve(&ctx.method, &ctx.path) {
        RouteMatch::Found(route) => route.handler.clone(),
        RouteMatch::MethodNotAllowed => {
            return respond(response_out, ActionResponse::plain(405, "Method Not Allowed")).await
        }
        RouteMatch::NotFound => {
            return respond(response_out, ActionResponse::plain(404, "Not Found")).await
        }
    };

    match handler.as_str() {
        handlers::LISTING => render_listing(ctx, &config, logger, response_out).await,
        handlers::SELECT => {
            let body = read_body(req).await?;
            respond(response_out, actions::select(&body, &config, logger)).await
        }
        handlers::ADD_TO_CART => {
            let body = read_body(req).await?;
            respond(response_out, actions::add_to_cart(&body, &config, logger)).await
        }
        other => Err(anyhow!("No handler named {}", other)),
    }
}

/// Stream the listing page: shell first, then the sections.
async fn render_listing(
    ctx: RequestContext,
    config: &StorefrontConfig,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    logger
        .info_builder("Request started")
        .field("method", ctx.method.as_str())
        .field("path", ctx.path.clone())
        .emit();

    let params = ListingParams::from_context(&ctx);

    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into()),
        ("accept-ch".to_owned(), "Sec-CH-Viewport-Width".into()),
        ("vary".to_owned(), VIEWPORT_HINT_HEADER.into()),
    ];
    let headers =
        Fields::from_list(&header_list).map_err(|e| anyhow!("Invalid headers: {:?}", e))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(200)
        .map_err(|_| anyhow!("Invalid status code"))?;

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    let shell = create_shell(&page_title(&params));
    sink.send_shell(&shell.render_opening()).await?;

    let client = FetchClient::new(SpinTransport);
    let page = ListingPage::load(params, config, &client, logger).await;
    page.stream(&mut sink, &shell).await?;

    logger
        .info_builder("Request complete")
        .field_i64("items", page.controller.cards().len() as i64)
        .field_i64("bytes", sink.bytes_sent() as i64)
        .duration_ms(
            "time_to_shell_ms",
            sink.timing().time_to_shell().unwrap_or_default(),
        )
        .duration_ms("total_ms", sink.timing().elapsed())
        .emit();

    Ok(())
}

async fn read_body(req: IncomingRequest) -> anyhow::Result<Vec<u8>> {
    req.into_body()
        .await
        .map_err(|e| anyhow!("Failed to read request body: {:?}", e))
}

async fn respond(response_out: ResponseOutparam, resp: ActionResponse) -> anyhow::Result<()> {
    let header_list: Vec<(String, Vec<u8>)> = resp
        .headers
        .iter()
        .map(|(k, v)| (k.clone(), v.clone().into_bytes()))
        .collect();
    let headers =
        Fields::from_list(&header_list).map_err(|e| anyhow!("Invalid headers: {:?}", e))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(resp.status)
        .map_err(|_| anyhow!("Invalid status code {}", resp.status))?;

    let mut body = response.take_body();
    response_out.set(response);
    if !resp.body.is_empty() {
        body.send(resp.body.into_bytes())
            .await
            .map_err(|e| anyhow!("Failed to write body: {}", e))?;
    }
    Ok(())
}

fn to_http_method(method: &Method) -> Option<http::Method> {
    Some(match method {
        Method::Get => http::Method::GET,
        Method::Head => http::Method::HEAD,
        Method::Post => http::Method::POST,
        Method::Put => http::Method::PUT,
        Method::Delete => http::Method::DELETE,
        Method::Connect => http::Method::CONNECT,
        Method::Options => http::Method::OPTIONS,
        Method::Trace => http::Method::TRACE,
        Method::Patch => http::Method::PATCH,
        Method::Other(other) => return http::Method::from_bytes(other.as_bytes()).ok(),
    })
}
