//! Committee — the fixed set of members allowed to deposit and approve
//!
//! Built once at construction and never mutated. Keeps the members in their
//! configured order for display and a hash set for constant-time checks.

use std::collections::HashSet;
use types::ids::Address;

use crate::errors::CustodyError;

/// Upper bound on committee size.
pub const MAX_MEMBERS: usize = 20;

#[derive(Debug, Clone)]
pub struct Committee {
    members: Vec<Address>,
    index: HashSet<Address>,
}

impl Committee {
    /// Validate and build a committee.
    ///
    /// Rejects an empty or oversized list, the zero address, and duplicate
    /// entries. A duplicated identity would otherwise count twice toward
    /// quorum.
    pub fn new(members: Vec<Address>) -> Result<Self, CustodyError> {
        if members.is_empty() {
            return Err(CustodyError::invalid_config("committee must not be empty"));
        }
        if members.len() > MAX_MEMBERS {
            return Err(CustodyError::invalid_config(format!(
                "committee has {} members, maximum is {}",
                members.len(),
                MAX_MEMBERS
            )));
        }

        let mut index = HashSet::with_capacity(members.len());
        for member in &members {
            if member.is_zero() {
                return Err(CustodyError::invalid_config(
                    "zero address cannot be a committee member",
                ));
            }
            if !index.insert(*member) {
                return Err(CustodyError::invalid_config(format!(
                    "duplicate committee member {}",
                    member
                )));
            }
        }

        Ok(Self { members, index })
    }

    pub fn contains(&self, identity: &Address) -> bool {
        self.index.contains(identity)
    }

    /// Members in configured order.
    pub fn members(&self) -> &[Address] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addrs(n: u64) -> Vec<Address> {
        (0..n).map(Address::from_index).collect()
    }

    #[test]
    fn test_committee_membership() {
        let committee = Committee::new(addrs(3)).unwrap();
        assert_eq!(committee.len(), 3);
        assert!(committee.contains(&Address::from_index(2)));
        assert!(!committee.contains(&Address::from_index(3)));
        assert!(!committee.contains(&Address::ZERO));
    }

    #[test]
    fn test_committee_preserves_order() {
        let members = vec![Address::from_index(9), Address::from_index(1)];
        let committee = Committee::new(members.clone()).unwrap();
        assert_eq!(committee.members(), members.as_slice());
    }

    #[test]
    fn test_committee_empty_rejected() {
        let result = Committee::new(Vec::new());
        assert!(matches!(
            result,
            Err(CustodyError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_committee_max_size() {
        assert!(Committee::new(addrs(MAX_MEMBERS as u64)).is_ok());
        assert!(matches!(
            Committee::new(addrs(MAX_MEMBERS as u64 + 1)),
            Err(CustodyError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_committee_duplicate_rejected() {
        let mut members = addrs(3);
        members.push(Address::from_index(1));
        let err = Committee::new(members).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_committee_zero_address_rejected() {
        let members = vec![Address::from_index(0), Address::ZERO];
        let err = Committee::new(members).unwrap_err();
        assert!(err.to_string().contains("zero address"));
    }
}
