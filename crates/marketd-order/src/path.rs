//! Order query path codec.
//!
//! The host strips the module's namespace prefix; what remains is either
//! empty (list every order) or `<owner-hex>/<dseq>/<gseq>/<oseq>`.

use std::str::FromStr;

use marketd_types::{Address, LedgerError, OrderId, Result, constants};

/// What an order query path addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderQuery {
    All,
    One(OrderId),
}

/// Parse the suffix of an order query path.
///
/// # Errors
/// `InvalidPath` carrying the offending suffix when it is non-empty and not
/// a well-formed order key.
pub fn parse_order_path(suffix: &str) -> Result<OrderQuery> {
    if suffix.is_empty() {
        return Ok(OrderQuery::All);
    }

    let parts: Vec<&str> = suffix.split(constants::PATH_SEPARATOR).collect();
    let [owner, dseq, gseq, oseq] = parts.as_slice() else {
        return Err(invalid(
            suffix,
            format!("expected 4 components, found {}", parts.len()),
        ));
    };

    let owner = Address::from_str(owner).map_err(|e| match e {
        LedgerError::InvalidPath { reason, .. } => invalid(suffix, reason),
        other => other,
    })?;

    Ok(OrderQuery::One(OrderId {
        owner,
        dseq: number(suffix, "deployment sequence", dseq)?,
        gseq: number(suffix, "group sequence", gseq)?,
        oseq: number(suffix, "order sequence", oseq)?,
    }))
}

/// Parse a decimal sequence number. Digits only, so `+1` is refused and
/// each key has one spelling.
fn number<T: FromStr>(path: &str, what: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(path, format!("{what} {raw:?}: not a decimal number")));
    }
    raw.parse()
        .map_err(|e| invalid(path, format!("{what} {raw:?}: {e}")))
}

fn invalid(path: &str, reason: String) -> LedgerError {
    LedgerError::InvalidPath {
        path: path.to_string(),
        reason,
    }
}
