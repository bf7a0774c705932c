//! Tests for the conversion rule registry and the credit ledger
