use std::collections::HashMap;

use aulas::{Config, build_server_with_store, model::{IdPolicy, LessonStore}};
use axum::http::StatusCode;
use axum_test::TestServer;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Server over a freshly seeded store, so tests never share state.
pub fn setup_server(policy: IdPolicy) -> TestServer {
    setup_server_with(LessonStore::seeded(policy), &Config::default())
}

pub fn setup_server_with(store: LessonStore, config: &Config) -> TestServer {
    let (_, app) = build_server_with_store(store, config);
    TestServer::new(app).unwrap()
}

#[derive(Debug)]
pub struct FlowContext {
    pub store: HashMap<&'static str, Value>, // a way to pass data between steps
}

impl FlowContext {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    pub fn store(&mut self, key: &'static str, val: Value) {
        self.store.insert(key, val);
    }

    pub fn get(&self, key: &str) -> &Value {
        self.store.get(key).expect("missing store key")
    }

    pub fn get_json<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned,
    {
        let obj = self.get(key);
        serde_json::from_value(obj.clone()).expect("Invalid json format")
    }
}

pub struct Action {
    #[allow(unused)]
    pub name: &'static str,
    pub method: &'static str,
    pub path: String,
    pub dyn_path: Option<Box<dyn Fn(&FlowContext) -> String + Send + Sync>>,
    pub body: Option<Value>,
    pub expect: StatusCode,
    pub expect_empty_body: bool,
    pub body_asserts: Vec<Box<dyn Fn(&Value) + Send + Sync>>,
    pub save_as: Option<&'static str>,
}

impl Action {
    pub fn new(name: &'static str, method: &'static str, path: &str) -> Self {
        Self {
            name,
            method,
            path: path.to_string(),
            dyn_path: None,
            body: None,
            expect: StatusCode::OK,
            expect_empty_body: false,
            body_asserts: vec![],
            save_as: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_expect(mut self, expect: StatusCode) -> Self {
        self.expect = expect;
        self
    }

    pub fn with_empty_body(mut self) -> Self {
        self.expect_empty_body = true;
        self
    }

    pub fn with_dyn_path<F>(mut self, f: F) -> Self
    where
        F: Fn(&FlowContext) -> String + Send + Sync + 'static,
    {
        self.dyn_path = Some(Box::new(f));
        self
    }

    pub fn with_save_as(mut self, key: &'static str) -> Self {
        self.save_as = Some(key);
        self
    }

    pub fn assert_body<F>(mut self, check: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.body_asserts.push(Box::new(check));
        self
    }
}

pub struct Flow {
    actions: Vec<Action>,
}

impl Flow {
    pub fn new() -> Self {
        Self { actions: vec![] }
    }

    pub fn step(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub async fn run(self, server: &TestServer) -> FlowContext {
        let mut ctx = FlowContext::new(); // create new context for this flow
        for action in self.actions {
            println!("==> Running test action `{}`", action.name);

            let path = if let Some(dyn_path_fn) = action.dyn_path {
                dyn_path_fn(&ctx)
            } else {
                action.path.clone()
            };

            let mut req = match action.method {
                "GET" => server.get(&path),
                "POST" => server.post(&path),
                "PUT" => server.put(&path),
                "DELETE" => server.delete(&path),
                _ => panic!("unsupported method {}", action.method),
            };

            if let Some(json) = action.body {
                req = req.json(&json);
            }

            let resp = req.await;
            resp.assert_status(action.expect);

            if action.expect_empty_body {
                assert!(resp.text().is_empty(), "expected empty body");
            }

            if !action.body_asserts.is_empty() {
                let body = resp.json::<Value>();
                for check in action.body_asserts {
                    check(&body);
                }
            }

            if let Some(save_key) = action.save_as {
                let body = resp.json::<Value>();
                ctx.store(save_key, body);
            }
        }
        ctx
    }
}

// Common actions builders

pub fn list_action() -> Action {
    Action::new("list", "GET", "/aulas")
}

pub fn create_action(title: &str, content: &str) -> Action {
    Action::new("create", "POST", "/aulas")
        .with_body(json!({
            "title": title,
            "content": content,
        }))
        .with_expect(StatusCode::CREATED)
}

pub fn get_action(id: &str) -> Action {
    Action::new("get", "GET", &format!("/aulas/{id}"))
}

pub fn update_action(id: &str, body: Value) -> Action {
    Action::new("update", "PUT", &format!("/aulas/{id}")).with_body(body)
}

pub fn delete_action(id: &str) -> Action {
    Action::new("delete", "DELETE", &format!("/aulas/{id}"))
        .with_expect(StatusCode::NO_CONTENT)
        .with_empty_body()
}

pub fn assert_not_found(body: &Value) {
    assert_eq!(body, &json!({ "message": "Item não encontrado" }));
}

pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("expected an array")
        .iter()
        .map(|l| l["id"].as_i64().expect("id is not an integer"))
        .collect()
}
