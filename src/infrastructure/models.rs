use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::{customers, invoices};

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InvoiceRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: String,
    pub date: NaiveDate,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = invoices)]
pub struct NewInvoiceRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: String,
    pub date: NaiveDate,
}
