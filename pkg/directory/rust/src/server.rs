// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::CONTENT_TYPE;
use hyper::server::conn::http1;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use hyper_util::service::TowerToHyperService;
use log::{debug, error, info, warn};
use roster_model::Roster;
use serde::Serialize;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::api::{
    Failure, Health, LIST_FAILED, LOOKUP_FAILED, MEMBER_NOT_FOUND, MemberDetail, MemberList,
    ROUTE_NOT_FOUND,
};
use crate::errors::Error;

pub type Body = Full<Bytes>;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Read-only request handling over a shared roster.
#[derive(Debug, Clone)]
pub struct Directory {
    roster: Arc<Roster>,
}

impl Directory {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn handle<B>(&self, req: &Request<B>) -> Response<Body> {
        let response = self.route(req.method(), req.uri().path());
        info!(
            "{} {} -> {}",
            req.method(),
            req.uri().path(),
            response.status().as_u16()
        );
        response
    }

    pub fn route(&self, method: &Method, path: &str) -> Response<Body> {
        if *method == Method::HEAD {
            // Same status and headers as GET, without the body.
            return self.route(&Method::GET, path).map(|_| Body::default());
        }

        match (method, trim_trailing_slash(path)) {
            (&Method::GET, "/members") => self.list_members(),
            (&Method::GET, "/health") => health(),
            (&Method::GET, path) => match path.strip_prefix("/members/") {
                Some(id) if !id.contains('/') => self.get_member(id),
                _ => failure(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND),
            },
            _ => failure(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND),
        }
    }

    fn list_members(&self) -> Response<Body> {
        json_response(StatusCode::OK, &MemberList::new(self.roster.members())).unwrap_or_else(
            |e| {
                error!("Failed to build member list response: {e}");
                failure(StatusCode::INTERNAL_SERVER_ERROR, LIST_FAILED)
            },
        )
    }

    fn get_member(&self, raw_id: &str) -> Response<Body> {
        // A non-numeric id can never match, so it is a plain miss.
        let Some(member) = raw_id
            .parse::<u32>()
            .ok()
            .and_then(|id| self.roster.get(id))
        else {
            debug!("No member with id {raw_id:?}");
            return failure(StatusCode::NOT_FOUND, MEMBER_NOT_FOUND);
        };

        json_response(StatusCode::OK, &MemberDetail::new(member)).unwrap_or_else(|e| {
            error!("Failed to build response for member {}: {e}", member.id);
            failure(StatusCode::INTERNAL_SERVER_ERROR, LOOKUP_FAILED)
        })
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

fn health() -> Response<Body> {
    json_response(StatusCode::OK, &Health::default()).unwrap_or_else(|e| {
        error!("Failed to build health response: {e}");
        failure(StatusCode::INTERNAL_SERVER_ERROR, "Health check failed")
    })
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    let bytes = serde_json::to_vec(body)?;
    Ok(Response::builder()
        .status(status)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(Full::new(Bytes::from(bytes)))?)
}

fn failure(status: StatusCode, message: &str) -> Response<Body> {
    json_response(status, &Failure::new(message)).unwrap_or_else(|e| {
        error!("Failed to build error response: {e}");
        // Last resort if even the error envelope cannot be built
        let mut response = Response::new(Full::new(Bytes::from_static(b"Internal Server Error")));
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        response
    })
}

/// Accept connections on `listener` until `shutdown` resolves.
///
/// Each connection is served on its own task. Connections still open when
/// `shutdown` fires are left to finish on the runtime.
pub async fn serve<F>(
    listener: TcpListener,
    directory: Directory,
    cors: CorsLayer,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()>,
{
    let addr = listener.local_addr()?;
    info!(
        "Serving {} members, listening on {addr}",
        directory.roster().len()
    );

    let service = ServiceBuilder::new()
        .layer(cors)
        .service(tower::service_fn(move |req: Request<Incoming>| {
            let directory = directory.clone();
            async move { Ok::<_, Infallible>(directory.handle(&req)) }
        }));

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        // Usually fd exhaustion; back off instead of spinning.
                        warn!("Failed to accept connection: {e}");
                        tokio::time::sleep(ACCEPT_BACKOFF).await;
                        continue;
                    }
                };

                let io = TokioIo::new(stream);
                let service = TowerToHyperService::new(service.clone());
                tokio::task::spawn(async move {
                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        error!("Error serving connection from {peer}: {err}");
                    }
                });
            }
            _ = &mut shutdown => {
                info!("Directory shutting down");
                return Ok(());
            }
        }
    }
}
