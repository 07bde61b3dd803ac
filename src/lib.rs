//! ROI Calculator - Chatbot and CRM Automation Investment Projection
//!
//! This crate computes return-on-investment projections for businesses that
//! automate customer-inquiry handling and CRM workflows, and serves them over
//! a small JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
