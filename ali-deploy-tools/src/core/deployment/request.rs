// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract creation transaction

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    rpc::types::TransactionRequest,
};

/// Creation transaction for a contract: its bytecode followed by the encoded constructor
/// arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentRequest {
    from: Address,
    code: Bytes,
    value: U256,
}

impl DeploymentRequest {
    pub fn new(from: Address, bytecode: &[u8], constructor_args: &[u8], value: U256) -> Self {
        let mut code = Vec::with_capacity(bytecode.len() + constructor_args.len());
        code.extend_from_slice(bytecode);
        code.extend_from_slice(constructor_args);
        Self {
            from,
            code: code.into(),
            value,
        }
    }

    pub fn from(&self) -> Address {
        self.from
    }

    /// Init code sent with the transaction.
    pub fn code(&self) -> &Bytes {
        &self.code
    }

    /// Encoded constructor arguments, given the length of the bytecode they follow.
    pub fn constructor_args(&self, bytecode_len: usize) -> &[u8] {
        self.code.get(bytecode_len..).unwrap_or_default()
    }

    pub fn tx(&self) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.from)
            .with_value(self.value)
            .with_deploy_code(self.code.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::TxKind;

    #[test]
    fn builds_creation_tx() {
        let from = Address::repeat_byte(0xa0);
        let req = DeploymentRequest::new(from, &[0x60, 0x80], &[0x01, 0x02], U256::ZERO);
        assert_eq!(&req.code()[..], &[0x60, 0x80, 0x01, 0x02]);
        assert_eq!(req.constructor_args(2), &[0x01, 0x02]);
        assert!(req.constructor_args(8).is_empty());

        let tx = req.tx();
        assert_eq!(tx.from, Some(from));
        assert_eq!(tx.to, Some(TxKind::Create));
        assert_eq!(
            tx.input.input().map(|input| &input[..]),
            Some(&[0x60, 0x80, 0x01, 0x02][..])
        );
    }
}
