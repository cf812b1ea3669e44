//! Test doubles for the transport, the shell and the session fixtures.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use shared::models::{User, UserRole};

use crate::api::PharmacyClient;
use crate::routes::Route;
use crate::session::{Session, SessionStore};
use crate::shell::{NoticeLevel, Shell};
use crate::storage::{MemoryStorage, TokenStorage};
use crate::transport::{ApiResponse, HttpRequest, Transport, TransportError};

/// Replays scripted outcomes in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    script: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn respond(&self, status: StatusCode, body: Value) -> &Self {
        self.script
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body.to_string())));
        self
    }

    pub fn respond_text(&self, status: StatusCode, body: &str) -> &Self {
        self.script
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(&self) -> &Self {
        self.script
            .borrow_mut()
            .push_back(Err(TransportError::Send("connection refused".into())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Send("no scripted response".into())))
    }
}

/// Captures the side effects the orchestration layer asks for.
#[derive(Default)]
pub struct RecordingShell {
    pub notices: RefCell<Vec<(NoticeLevel, String)>>,
    pub redirects: RefCell<Vec<Route>>,
    pub cart_counts: RefCell<Vec<u32>>,
}

impl RecordingShell {
    pub fn messages(&self) -> Vec<String> {
        self.notices.borrow().iter().map(|(_, m)| m.clone()).collect()
    }

    pub fn last_notice(&self) -> Option<(NoticeLevel, String)> {
        self.notices.borrow().last().cloned()
    }

    pub fn redirects(&self) -> Vec<Route> {
        self.redirects.borrow().clone()
    }
}

impl Shell for RecordingShell {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_string()));
    }

    fn redirect(&self, route: Route) {
        self.redirects.borrow_mut().push(route);
    }

    fn cart_changed(&self, items: u32) {
        self.cart_counts.borrow_mut().push(items);
    }
}

/// A client wired to test doubles, with handles to inspect each of them.
pub struct Harness {
    pub client: PharmacyClient,
    pub transport: Rc<MockTransport>,
    pub shell: Rc<RecordingShell>,
    pub storage: Rc<MemoryStorage>,
    pub observed: Rc<RefCell<Vec<Session>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::default())
    }

    /// A harness whose storage already holds `token` (not yet restored).
    pub fn with_stored_token(token: &str) -> Self {
        Self::with_storage(MemoryStorage::with_token(token))
    }

    /// A harness with an established session for [`sample_user`].
    pub fn signed_in() -> Self {
        let harness = Self::new();
        harness.session().set("tok-123".into(), sample_user());
        harness.observed.borrow_mut().clear();
        harness
    }

    fn with_storage(storage: MemoryStorage) -> Self {
        let transport = Rc::new(MockTransport::default());
        let shell = Rc::new(RecordingShell::default());
        let storage = Rc::new(storage);
        let observed = Rc::new(RefCell::new(Vec::new()));
        let sink = observed.clone();
        let session = SessionStore::new(storage.clone() as Rc<dyn TokenStorage>)
            .with_observer(yew::Callback::from(move |session: Session| {
                sink.borrow_mut().push(session);
            }));
        let client = PharmacyClient::new(
            "http://pharmacy.test",
            transport.clone() as Rc<dyn Transport>,
            session,
            shell.clone() as Rc<dyn Shell>,
        );
        Self {
            client,
            transport,
            shell,
            storage,
            observed,
        }
    }

    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }
}

pub fn sample_user() -> User {
    serde_json::from_value(user_json()).expect("sample user")
}

pub fn user_json() -> Value {
    json!({
        "id": 1,
        "username": "asha",
        "email": "asha@example.com",
        "phone": "555-0101",
        "full_name": "Asha Rao",
        "age": 34,
        "medical_conditions": null,
        "allergies": "penicillin",
        "role": "user",
        "is_active": true,
        "is_phone_verified": false,
        "address": "12 Market Street",
        "city": "Pune",
        "state": "MH",
        "zip_code": "411001",
        "created_at": "2025-01-10T09:30:00"
    })
}

pub fn admin_user() -> User {
    let mut user = sample_user();
    user.role = UserRole::Admin;
    user
}

pub fn medicine_json(id: i64, name: &str, prescription_required: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "generic_name": null,
        "brand_name": null,
        "description": "Relief",
        "price": 4.5,
        "dosage": "500mg",
        "form": "tablet",
        "strength": null,
        "manufacturer": "Acme",
        "prescription_required": prescription_required,
        "category_id": 2,
        "stock_quantity": 40,
        "low_stock_threshold": 10,
        "is_available": true,
        "is_emergency_available": true,
        "category": null
    })
}

pub fn cart_json(items: &[(i64, i64, i64)]) -> Value {
    let items: Vec<Value> = items
        .iter()
        .map(|&(id, medicine_id, quantity)| {
            json!({
                "id": id,
                "medicine_id": medicine_id,
                "quantity": quantity,
                "prescription_id": null,
                "medicine": medicine_json(medicine_id, "Paracetamol", false),
                "created_at": "2025-01-10T09:30:00"
            })
        })
        .collect();
    json!({
        "items": items,
        "total_amount": 9.0,
        "prescription_required_items": 0
    })
}

pub fn order_json(id: i64, number: &str) -> Value {
    json!({
        "id": id,
        "order_number": number,
        "total_amount": 12.5,
        "delivery_fee": 2.0,
        "tax_amount": 0.5,
        "discount_amount": 0,
        "status": "pending",
        "delivery_address": "12 Market Street",
        "delivery_phone": "555-0101",
        "estimated_delivery_time": "2025-01-10T11:30:00",
        "actual_delivery_time": null,
        "is_emergency": false,
        "payment_method": "cash_on_delivery",
        "payment_status": "pending",
        "tracking_number": null,
        "delivery_notes": null,
        "created_at": "2025-01-10T09:30:00",
        "updated_at": null,
        "order_items": []
    })
}

pub fn prescription_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "user_id": 1,
        "doctor_name": "Dr. Mehta",
        "hospital_name": "City Hospital",
        "prescription_date": "2025-01-05T00:00:00",
        "file_path": "uploads/rx.pdf",
        "file_name": "rx.pdf",
        "status": status,
        "verification_notes": null,
        "extracted_medicines": null,
        "created_at": "2025-01-05T10:00:00",
        "updated_at": null
    })
}
