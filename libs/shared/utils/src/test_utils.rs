use std::sync::Arc;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::User;

use crate::session::SessionStore;

pub struct TestConfig {
    pub open_hour: u32,
    pub close_hour: u32,
    pub slot_interval_minutes: u32,
    pub hide_booked_slots: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            open_hour: 9,
            close_hour: 17,
            slot_interval_minutes: 30,
            hide_booked_slots: false,
        }
    }
}

impl TestConfig {
    pub fn hiding_booked_slots() -> Self {
        Self {
            hide_booked_slots: true,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            clinic_open_hour: self.open_hour,
            clinic_close_hour: self.close_hour,
            slot_interval_minutes: self.slot_interval_minutes,
            hide_booked_slots: self.hide_booked_slots,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub id: String,
    pub email: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new(&format!("patient-{}@example.com", Uuid::new_v4().simple()))
    }
}

impl TestUser {
    pub fn new(email: &str) -> Self {
        Self {
            id: email.to_lowercase(),
            email: email.to_string(),
        }
    }

    pub fn to_user(&self) -> User {
        User::from_email(self.id.clone(), &self.email)
    }

    /// Opens a session for this user and returns its bearer token.
    pub async fn sign_in(&self, sessions: &SessionStore) -> String {
        sessions.create(self.to_user()).await.token
    }

    pub fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }
}

/// Doctor records in the bundled dataset's JSON shape.
pub struct DoctorFixtures;

impl DoctorFixtures {
    pub fn doctor(id: &str, name: &str, specialty: &str, location: &str, fee: f64) -> Value {
        json!({
            "id": id,
            "name": name,
            "specialty": specialty,
            "subspecialty": "General",
            "rating": 4.5,
            "reviews": 100,
            "experience": "10 years",
            "consultationFee": fee,
            "location": location,
            "hospital": "Kenyatta National Hospital",
            "languages": ["English", "Swahili"],
            "availability": ["Monday", "Wednesday", "Friday"]
        })
    }

    pub fn cardiologist() -> Value {
        json!({
            "id": "1",
            "name": "Dr. Sarah Wanjiku Kamau",
            "specialty": "Cardiologist",
            "subspecialty": "Interventional Cardiology",
            "rating": 4.9,
            "reviews": 127,
            "experience": "15 years",
            "consultationFee": 3000,
            "location": "Nairobi",
            "hospital": "Kenyatta National Hospital",
            "languages": ["English", "Swahili", "Kikuyu"],
            "availability": ["Monday", "Tuesday", "Thursday"]
        })
    }

    pub fn neurologist() -> Value {
        json!({
            "id": "2",
            "name": "Dr. Michael Otieno",
            "specialty": "Neurologist",
            "subspecialty": "Epilepsy",
            "rating": 4.7,
            "reviews": 89,
            "experience": "12 years",
            "consultationFee": 1500,
            "location": "Kisumu",
            "hospital": "Jaramogi Oginga Odinga Teaching and Referral Hospital",
            "languages": ["English", "Swahili", "Luo"],
            "availability": ["Wednesday", "Friday"]
        })
    }

    pub fn orthopedic_surgeon() -> Value {
        json!({
            "id": "4",
            "name": "Dr. James Kiprop Cheruiyot",
            "specialty": "Orthopedic Surgeon",
            "subspecialty": "Sports Medicine",
            "rating": 4.8,
            "reviews": 156,
            "experience": "20 years",
            "consultationFee": 5000,
            "location": "Eldoret",
            "hospital": "Moi Teaching and Referral Hospital",
            "languages": ["English", "Swahili", "Kalenjin"],
            "availability": ["Monday", "Thursday", "Saturday"]
        })
    }

    pub fn catalog_json(doctors: Vec<Value>) -> String {
        json!({ "doctors": doctors }).to_string()
    }
}
