use std::time::Duration;

use stockroom::domain::product::{ProductDraft, ProductId};
use stockroom::repository::{ApiError, HttpProductRepository, ProductRepository, SearchQuery};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

const PRODUCT_JSON: &str = r#"{"id":7,"name":"Kopi Bubuk Toraja","price":95000,"stock":6,
    "createdAt":"2026-03-01T08:00:00Z","updatedAt":"2026-03-02T09:30:00Z"}"#;

/// A request as seen by the stub server.
#[derive(Debug)]
struct Captured {
    request_line: String,
    body: String,
}

/// Serve the same canned response to every connection on an ephemeral port.
async fn stub_server(
    status: &'static str,
    body: impl Into<String>,
) -> (String, mpsc::UnboundedReceiver<Captured>) {
    let body: String = body.into();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let tx = tx.clone();
            let body = body.clone();
            tokio::spawn(async move {
                let captured = read_request(&mut socket).await;
                let _ = tx.send(captured);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{}/api", addr), rx)
}

/// Accept connections and never answer them.
async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{}/api", addr)
}

async fn read_request(socket: &mut TcpStream) -> Captured {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut buf).await.unwrap_or(0);
        if n == 0 {
            break data.len();
        }
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&data[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);

    while data.len() < header_end + content_length {
        let n = socket.read(&mut buf).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }

    Captured {
        request_line: head.lines().next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&data[header_end..]).to_string(),
    }
}

fn client(base_url: &str) -> HttpProductRepository {
    HttpProductRepository::new(base_url, Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn test_list_decodes_products() {
    let (base_url, mut requests) = stub_server("200 OK", format!("[{}]", PRODUCT_JSON)).await;

    let products = client(&base_url).list().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, ProductId(7));
    assert_eq!(products[0].name, "Kopi Bubuk Toraja");
    assert_eq!(products[0].stock, 6);
    assert_eq!(products[0].description, None);

    let captured = requests.recv().await.unwrap();
    assert_eq!(captured.request_line, "GET /api/products HTTP/1.1");
}

#[tokio::test]
async fn test_create_posts_json_draft() {
    let (base_url, mut requests) = stub_server("201 Created", PRODUCT_JSON).await;
    let draft = ProductDraft {
        name: "Kopi Bubuk Toraja".to_string(),
        price: 95_000.0,
        stock: 6,
    };

    let product = client(&base_url).create(&draft).await.unwrap();
    assert_eq!(product.id, ProductId(7));

    let captured = requests.recv().await.unwrap();
    assert_eq!(captured.request_line, "POST /api/products HTTP/1.1");
    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent["name"], "Kopi Bubuk Toraja");
    assert_eq!(sent["stock"], 6);
}

#[tokio::test]
async fn test_search_sends_query_parameters() {
    let body = r#"{"data":[],"total":0,"page":2,"limit":5}"#;
    let (base_url, mut requests) = stub_server("200 OK", body).await;

    let page = client(&base_url)
        .search(&SearchQuery::new("kopi").page(2).limit(5))
        .await
        .unwrap();
    assert!(page.products.is_empty());
    assert_eq!(page.page, 2);
    assert!(!page.has_more());

    let captured = requests.recv().await.unwrap();
    assert_eq!(
        captured.request_line,
        "GET /api/products/search?search=kopi&page=2&limit=5 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_not_found_maps_to_not_found() {
    let (base_url, _requests) =
        stub_server("404 Not Found", r#"{"error":"Product not found"}"#).await;

    let error = client(&base_url).get(ProductId(99)).await.unwrap_err();
    assert_eq!(error, ApiError::NotFound);
    assert_eq!(error.to_string(), "Data not found");
}

#[tokio::test]
async fn test_server_error_maps_to_server() {
    let (base_url, _requests) = stub_server("500 Internal Server Error", "boom").await;

    let error = client(&base_url).delete(ProductId(1)).await.unwrap_err();
    assert_eq!(error, ApiError::Server { status: 500 });
    assert_eq!(error.to_string(), "Server error, try again later");
}

#[tokio::test]
async fn test_rejection_carries_server_message() {
    let (base_url, _requests) =
        stub_server("400 Bad Request", r#"{"error":"Name already exists"}"#).await;
    let draft = ProductDraft {
        name: "Duplicate".to_string(),
        price: 1_000.0,
        stock: 1,
    };

    let error = client(&base_url).update(ProductId(3), &draft).await.unwrap_err();
    assert_eq!(
        error,
        ApiError::Rejected {
            status: 400,
            message: "Name already exists".to_string()
        }
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (base_url, _requests) = stub_server("200 OK", r#"{"unexpected":true}"#).await;

    let error = client(&base_url).list().await.unwrap_err();
    assert!(matches!(error, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let base_url = silent_server().await;
    let repo = HttpProductRepository::new(base_url, Duration::from_millis(200)).unwrap();

    let error = repo.health().await.unwrap_err();
    assert_eq!(error, ApiError::Timeout);
    assert_eq!(error.to_string(), "Connection timed out, try again");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind then drop so the port is very likely closed
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let error = client(&format!("http://{}/api", addr)).list().await.unwrap_err();
    assert!(matches!(error, ApiError::Network(_)));
}
