//! Encoding card and bank-account parameters as form bodies.
//!
//! Run with: cargo run --example card_params

use serde::Serialize;
use serde_form::{encode, to_map, FormEncodable, FormMap, FormValue, Result, CONTENT_TYPE};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Address {
    line1: String,
    city: String,
    postal_code: String,
}

impl FormEncodable for Address {
    fn form_fields(&self) -> Result<FormMap> {
        to_map(self)
    }
}

#[derive(Debug, Serialize)]
struct CardParams {
    number: String,
    exp_month: u8,
    exp_year: u16,
    cvc: Option<String>,
    #[serde(skip)]
    address: Option<Address>,
}

impl FormEncodable for CardParams {
    fn root_object_name(&self) -> Option<&str> {
        Some("card")
    }

    fn form_fields(&self) -> Result<FormMap> {
        let mut fields = to_map(self)?;
        if let Some(address) = &self.address {
            fields.insert("address".to_string(), FormValue::from_encodable(address)?);
        }
        Ok(fields)
    }
}

#[derive(Debug, Serialize)]
struct BankAccountParams {
    account_number: String,
    routing_number: String,
    country: String,
}

impl FormEncodable for BankAccountParams {
    fn root_object_name(&self) -> Option<&str> {
        Some("bank_account")
    }

    fn form_fields(&self) -> Result<FormMap> {
        to_map(self)
    }
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let card = CardParams {
        number: "4242424242424242".to_string(),
        exp_month: 12,
        exp_year: 2030,
        cvc: None,
        address: Some(Address {
            line1: "510 Townsend St".to_string(),
            city: "San Francisco".to_string(),
            postal_code: "94103".to_string(),
        }),
    };

    let body = encode(&card)?;
    println!("Content-Type: {}", CONTENT_TYPE);
    println!("{}\n", String::from_utf8_lossy(&body));

    let account = BankAccountParams {
        account_number: "000123456789".to_string(),
        routing_number: "110000000".to_string(),
        country: "US".to_string(),
    };

    println!("{}", String::from_utf8_lossy(&encode(&account)?));

    Ok(())
}
