mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tienda_back::utils::jwt::JwtKeys;
use tower::ServiceExt;

use common::{SECRET, offline_app, send, token_for};

#[tokio::test]
async fn health_is_public() {
    let (app, _) = offline_app("frontend");

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn protected_write_without_header_is_forbidden() {
    let (app, _) = offline_app("frontend");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/categorias",
        None,
        Some(json!({ "nombre": "Ropa" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["mensaje"], "No se proporcionó un token");
}

#[tokio::test]
async fn every_protected_route_requires_a_token() {
    let (app, _) = offline_app("frontend");

    for (method, uri) in [
        (Method::PUT, "/api/categorias/1"),
        (Method::DELETE, "/api/categorias/1"),
        (Method::POST, "/api/productos"),
        (Method::PUT, "/api/productos/1"),
        (Method::DELETE, "/api/productos/1"),
        (Method::POST, "/api/imagenes"),
        (Method::DELETE, "/api/imagenes/1"),
        (Method::GET, "/api/comprobantes"),
        (Method::POST, "/api/comprobantes"),
        (Method::GET, "/api/comprobantes/1"),
        (Method::DELETE, "/api/comprobantes/1"),
    ] {
        let (status, _) = send(&app, method.clone(), uri, None, Some(json!({}))).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn malformed_token_is_unauthorized() {
    let (app, _) = offline_app("frontend");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/categorias",
        Some("not-a-jwt"),
        Some(json!({ "nombre": "Ropa" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["mensaje"], "Token inválido o expirado");
}

#[tokio::test]
async fn header_without_bearer_scheme_is_unauthorized() {
    let (app, state) = offline_app("frontend");
    let token = token_for(&state, 1, "ana");

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/categorias/1")
        .header(header::AUTHORIZATION, token)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bearer_scheme_is_case_insensitive() {
    let (app, state) = offline_app("frontend");
    let token = token_for(&state, 1, "ana");

    for scheme in ["bearer", "BEARER"] {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/categorias")
            .header(header::AUTHORIZATION, format!("{} {}", scheme, token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "nombre": "" }).to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", scheme);
    }

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/categorias/1")
        .header(header::AUTHORIZATION, format!("Basic {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_or_foreign_tokens_are_unauthorized() {
    let (app, _) = offline_app("frontend");
    let expired = JwtKeys::new(SECRET, -300).issue(1, "ana").unwrap();
    let foreign = JwtKeys::new("other-secret", 3600).issue(1, "ana").unwrap();

    for token in [expired, foreign] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/categorias",
            Some(&token),
            Some(json!({ "nombre": "Ropa" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn blank_category_name_is_rejected_before_the_store() {
    let (app, state) = offline_app("frontend");
    let token = token_for(&state, 1, "ana");

    for body in [json!({ "nombre": "   " }), json!({})] {
        let (status, response) =
            send(&app, Method::POST, "/api/categorias", Some(&token), Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["mensaje"], "El nombre de la categoría es obligatorio");
    }
}

#[tokio::test]
async fn incomplete_writes_are_bad_requests() {
    let (app, state) = offline_app("frontend");
    let token = token_for(&state, 1, "ana");

    let cases = [
        (
            Method::POST,
            "/api/productos",
            json!({ "nombre": "Polo", "categoria_id": 1 }),
        ),
        (
            Method::PUT,
            "/api/productos/3",
            json!({ "nombre": "", "precio": "10.00", "categoria_id": 1 }),
        ),
        (Method::PUT, "/api/categorias/3", json!({ "nombre": "" })),
        (
            Method::POST,
            "/api/imagenes",
            json!({ "url": "https://cdn.tienda.pe/a.jpg" }),
        ),
        (
            Method::POST,
            "/api/comprobantes",
            json!({ "numero": "B001-1", "monto": "15.50" }),
        ),
        (
            Method::POST,
            "/api/comprobantes",
            json!({ "numero": "B001-1", "monto": "15.50", "fecha": "ayer" }),
        ),
    ];

    for (method, uri, body) in cases {
        let (status, response) = send(&app, method.clone(), uri, Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", method, uri);
        assert!(response["mensaje"].is_string(), "{} {}", method, uri);
    }
}

#[tokio::test]
async fn blank_form_numbers_read_as_missing_fields() {
    let (app, state) = offline_app("frontend");
    let token = token_for(&state, 1, "ana");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/productos",
        Some(&token),
        Some(json!({ "nombre": "Polo", "precio": "", "categoria_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["mensaje"],
        "Faltan campos obligatorios (nombre, precio, categoria_id)"
    );

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/comprobantes",
        Some(&token),
        Some(json!({ "numero": "B001-1", "monto": "", "fecha": "2025-03-14" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["mensaje"].is_string());
}

#[tokio::test]
async fn mistyped_or_broken_bodies_answer_with_a_message() {
    let (app, state) = offline_app("frontend");
    let token = token_for(&state, 1, "ana");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/categorias",
        Some(&token),
        Some(json!({ "nombre": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensaje"], "Datos inválidos en el cuerpo de la solicitud");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/productos",
        Some(&token),
        Some(json!({ "nombre": "Polo", "precio": "gratis", "categoria_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["mensaje"].is_string());

    for (content_type, payload) in [
        ("application/json", r#"{"usuario": "ana", "#),
        ("text/plain", r#"{"usuario": "ana", "password": "x"}"#),
    ] {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(payload))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", content_type);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["mensaje"].is_string(), "{}", content_type);
    }
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let (app, state) = offline_app("frontend");
    let token = token_for(&state, 1, "ana");

    for (method, uri, auth) in [
        (Method::DELETE, "/api/productos/abc", Some(token.as_str())),
        (Method::GET, "/api/productos/abc", None),
        (Method::GET, "/api/imagenes/1.5", None),
    ] {
        let (status, body) = send(&app, method.clone(), uri, auth, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", method, uri);
        assert_eq!(body["mensaje"], "Identificador inválido", "{} {}", method, uri);
    }
}

#[tokio::test]
async fn register_validates_before_hashing() {
    let (app, _) = offline_app("frontend");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "usuario": "  ", "password": "x" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn preflight_allows_any_origin() {
    let (app, _) = offline_app("frontend");

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/categorias")
        .header(header::ORIGIN, "http://localhost:5500")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization,content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _) = offline_app("frontend");

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/productos/{id}"]["put"].is_object());
    assert!(body["components"]["securitySchemes"]["bearerAuth"].is_object());
}

#[tokio::test]
async fn static_front_end_is_the_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Tienda</h1>").unwrap();
    let (app, _) = offline_app(dir.path().to_str().unwrap());

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"<h1>Tienda</h1>");

    let missing = app
        .oneshot(
            Request::builder()
                .uri("/no-existe.html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
