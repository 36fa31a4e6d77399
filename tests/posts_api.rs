//! Post, like, and comment endpoint tests.

mod common;

use axum::http::StatusCode;
use common::{create_post, register, spawn_server};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[tokio::test]
async fn create_snapshots_the_author_and_list_is_newest_first() {
    let server = spawn_server().await;
    let token = register(&server, "Ann", "ann@x.com", "longenough").await;

    let first = server
        .post("/api/posts")
        .add_header("x-auth-token", token.clone())
        .json(&json!({ "text": "first post" }))
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);
    let body: Value = first.json();
    assert_eq!(body["name"], "Ann");
    assert!(body["avatar"]
        .as_str()
        .unwrap()
        .starts_with("https://www.gravatar.com/avatar/"));

    create_post(&server, &token, "second post").await;

    let list = server
        .get("/api/posts")
        .add_header("x-auth-token", token)
        .await;
    assert_eq!(list.status_code(), StatusCode::OK);
    let posts: Value = list.json();
    assert_eq!(posts[0]["text"], "second post");
    assert_eq!(posts[1]["text"], "first post");
}

#[tokio::test]
async fn post_text_is_required() {
    let server = spawn_server().await;
    let token = register(&server, "Ann", "ann@x.com", "longenough").await;

    let response = server
        .post("/api/posts")
        .add_header("x-auth-token", token)
        .json(&json!({}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["errors"][0]["msg"],
        "Text is required"
    );
}

#[tokio::test]
async fn unknown_post_id_is_a_404() {
    let server = spawn_server().await;
    let token = register(&server, "Ann", "ann@x.com", "longenough").await;

    let response = server
        .get("/api/posts/no-such-post")
        .add_header("x-auth-token", token)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["msg"], "Post not found");
}

#[tokio::test]
async fn only_the_author_may_delete_a_post() {
    let server = spawn_server().await;
    let ann = register(&server, "Ann", "ann@x.com", "longenough").await;
    let bob = register(&server, "Bob", "bob@x.com", "longenough").await;
    let post_id = create_post(&server, &ann, "ann's post").await;

    let refused = server
        .delete(&format!("/api/posts/{post_id}"))
        .add_header("x-auth-token", bob.clone())
        .await;
    assert_eq!(refused.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(refused.json::<Value>()["msg"], "User is not authorised");

    // The post is still there.
    let fetched = server
        .get(&format!("/api/posts/{post_id}"))
        .add_header("x-auth-token", bob)
        .await;
    assert_eq!(fetched.status_code(), StatusCode::OK);

    let removed = server
        .delete(&format!("/api/posts/{post_id}"))
        .add_header("x-auth-token", ann.clone())
        .await;
    assert_eq!(removed.status_code(), StatusCode::OK);
    assert_eq!(removed.json::<Value>()["msg"], "Post removed");

    let gone = server
        .get(&format!("/api/posts/{post_id}"))
        .add_header("x-auth-token", ann)
        .await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn like_then_unlike_leaves_the_list_empty() {
    let server = spawn_server().await;
    let ann = register(&server, "Ann", "ann@x.com", "longenough").await;
    let bob = register(&server, "Bob", "bob@x.com", "longenough").await;
    let post_id = create_post(&server, &ann, "likeable").await;

    let liked = server
        .put(&format!("/api/posts/like/{post_id}"))
        .add_header("x-auth-token", bob.clone())
        .await;
    assert_eq!(liked.status_code(), StatusCode::OK);
    assert_eq!(liked.json::<Value>().as_array().unwrap().len(), 1);

    let unliked = server
        .put(&format!("/api/posts/unlike/{post_id}"))
        .add_header("x-auth-token", bob)
        .await;
    assert_eq!(unliked.status_code(), StatusCode::OK);
    assert_eq!(unliked.json::<Value>().as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn double_like_reports_already_liked_and_keeps_one_entry() {
    let server = spawn_server().await;
    let ann = register(&server, "Ann", "ann@x.com", "longenough").await;
    let bob = register(&server, "Bob", "bob@x.com", "longenough").await;
    let post_id = create_post(&server, &ann, "likeable").await;

    server
        .put(&format!("/api/posts/like/{post_id}"))
        .add_header("x-auth-token", bob.clone())
        .await;
    let second = server
        .put(&format!("/api/posts/like/{post_id}"))
        .add_header("x-auth-token", bob.clone())
        .await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(second.json::<Value>()["msg"], "Post already liked");

    let fetched = server
        .get(&format!("/api/posts/{post_id}"))
        .add_header("x-auth-token", bob)
        .await;
    assert_eq!(fetched.json::<Value>()["likes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unlike_without_a_like_reports_not_liked() {
    let server = spawn_server().await;
    let ann = register(&server, "Ann", "ann@x.com", "longenough").await;
    let bob = register(&server, "Bob", "bob@x.com", "longenough").await;
    let post_id = create_post(&server, &ann, "never liked").await;

    let response = server
        .put(&format!("/api/posts/unlike/{post_id}"))
        .add_header("x-auth-token", bob)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["msg"], "Post has not been liked");
}

#[tokio::test]
async fn comments_are_validated_snapshotted_and_prepended() {
    let server = spawn_server().await;
    let ann = register(&server, "Ann", "ann@x.com", "longenough").await;
    let bob = register(&server, "Bob", "bob@x.com", "longenough").await;
    let post_id = create_post(&server, &ann, "discuss").await;

    let invalid = server
        .post(&format!("/api/posts/comment/{post_id}"))
        .add_header("x-auth-token", bob.clone())
        .json(&json!({}))
        .await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

    server
        .post(&format!("/api/posts/comment/{post_id}"))
        .add_header("x-auth-token", bob.clone())
        .json(&json!({ "text": "older comment" }))
        .await;
    let second = server
        .post(&format!("/api/posts/comment/{post_id}"))
        .add_header("x-auth-token", bob)
        .json(&json!({ "text": "newer comment" }))
        .await;
    assert_eq!(second.status_code(), StatusCode::OK);

    let comments: Value = second.json();
    assert_eq!(comments[0]["text"], "newer comment");
    assert_eq!(comments[1]["text"], "older comment");
    assert_eq!(comments[0]["name"], "Bob");
}

#[tokio::test]
async fn comment_deletion_requires_the_comment_author() {
    let server = spawn_server().await;
    let ann = register(&server, "Ann", "ann@x.com", "longenough").await;
    let bob = register(&server, "Bob", "bob@x.com", "longenough").await;
    let post_id = create_post(&server, &ann, "discuss").await;

    let commented = server
        .post(&format!("/api/posts/comment/{post_id}"))
        .add_header("x-auth-token", bob.clone())
        .json(&json!({ "text": "bob's comment" }))
        .await;
    let comment_id = commented.json::<Value>()[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let missing = server
        .delete(&format!("/api/posts/comment/{post_id}/no-such-comment"))
        .add_header("x-auth-token", bob.clone())
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(missing.json::<Value>()["msg"], "Comment does not exist");

    let refused = server
        .delete(&format!("/api/posts/comment/{post_id}/{comment_id}"))
        .add_header("x-auth-token", ann)
        .await;
    assert_eq!(refused.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(refused.json::<Value>()["msg"], "User not authorised");

    let removed = server
        .delete(&format!("/api/posts/comment/{post_id}/{comment_id}"))
        .add_header("x-auth-token", bob)
        .await;
    assert_eq!(removed.status_code(), StatusCode::OK);
    assert_eq!(removed.json::<Value>().as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn comment_removal_keys_on_the_author_not_the_id() {
    let server = spawn_server().await;
    let ann = register(&server, "Ann", "ann@x.com", "longenough").await;
    let bob = register(&server, "Bob", "bob@x.com", "longenough").await;
    let post_id = create_post(&server, &ann, "discuss").await;

    server
        .post(&format!("/api/posts/comment/{post_id}"))
        .add_header("x-auth-token", bob.clone())
        .json(&json!({ "text": "older" }))
        .await;
    let commented = server
        .post(&format!("/api/posts/comment/{post_id}"))
        .add_header("x-auth-token", bob.clone())
        .json(&json!({ "text": "newer" }))
        .await;
    let older_id = commented.json::<Value>()[1]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Asking for the older comment removes bob's first (newest) comment
    // instead; author-keyed removal is the contract as shipped.
    let removed = server
        .delete(&format!("/api/posts/comment/{post_id}/{older_id}"))
        .add_header("x-auth-token", bob)
        .await;
    assert_eq!(removed.status_code(), StatusCode::OK);

    let comments: Value = removed.json();
    assert_eq!(comments.as_array().unwrap().len(), 1);
    assert_eq!(comments[0]["text"], "older");
}
