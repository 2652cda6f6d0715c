//! TxRep forms of host functions, authorization entries and resource declarations

use crate::error::WasmStellarError;
use crate::xdr::asset::Asset;
use crate::xdr::codec::UNBOUNDED;
use crate::xdr::scval::{ContractExecutable, ScAddress};
use crate::xdr::soroban::{
    BumpFootprintExpirationOp, ContractIdPreimage, ContractIdPreimageType, CreateContractArgs,
    ExtensionPoint, HostFunction, HostFunctionType, InvokeHostFunctionOp, LedgerFootprint,
    RestoreFootprintOp, SorobanAddressCredentials, SorobanAuthorizationEntry,
    SorobanAuthorizedContractFunction, SorobanAuthorizedFunction, SorobanAuthorizedFunctionType,
    SorobanAuthorizedInvocation, SorobanCredentials, SorobanCredentialsType, SorobanResources,
    SorobanTransactionData,
};

use super::reader::TxRepReader;
use super::writer::{child, TxRepWriter};
use super::{read_array, write_array, TxRepCodec};

/// `<path>.v: 0`
impl TxRepCodec for ExtensionPoint {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(&child(path, "v"), 0);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        let v_path = child(path, "v");
        match r.number::<i32>(&v_path)? {
            0 => Ok(ExtensionPoint::V0),
            v => Err(WasmStellarError::txrep(
                &v_path,
                format!("unsupported extension version {}", v),
            )),
        }
    }
}

impl TxRepCodec for ContractIdPreimage {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        match self {
            ContractIdPreimage::FromAddress { address, salt } => {
                w.line(&child(path, "type"), ContractIdPreimageType::FromAddress.name());
                address.write_txrep(w, &child(path, "fromAddress.address"));
                w.hex(&child(path, "fromAddress.salt"), salt);
            }
            ContractIdPreimage::FromAsset(asset) => {
                w.line(&child(path, "type"), ContractIdPreimageType::FromAsset.name());
                asset.write_txrep(w, &child(path, "fromAsset"));
            }
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(match r.named(&child(path, "type"), ContractIdPreimageType::from_name)? {
            ContractIdPreimageType::FromAddress => ContractIdPreimage::FromAddress {
                address: ScAddress::read_txrep(r, &child(path, "fromAddress.address"))?,
                salt: r.hex_fixed(&child(path, "fromAddress.salt"))?,
            },
            ContractIdPreimageType::FromAsset => {
                ContractIdPreimage::FromAsset(Asset::read_txrep(r, &child(path, "fromAsset"))?)
            }
        })
    }
}

impl TxRepCodec for CreateContractArgs {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.contract_id_preimage
            .write_txrep(w, &child(path, "contractIDPreimage"));
        self.executable.write_txrep(w, &child(path, "executable"));
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(CreateContractArgs {
            contract_id_preimage: ContractIdPreimage::read_txrep(
                r,
                &child(path, "contractIDPreimage"),
            )?,
            executable: ContractExecutable::read_txrep(r, &child(path, "executable"))?,
        })
    }
}

impl TxRepCodec for HostFunction {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(&child(path, "type"), self.function_type().name());
        match self {
            HostFunction::InvokeContract(args) => {
                write_array(w, &child(path, "invokeContract"), args)
            }
            HostFunction::CreateContract(args) => {
                args.write_txrep(w, &child(path, "createContract"))
            }
            HostFunction::UploadContractWasm(wasm) => w.hex(&child(path, "wasm"), wasm),
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(match r.named(&child(path, "type"), HostFunctionType::from_name)? {
            HostFunctionType::InvokeContract => HostFunction::InvokeContract(read_array(
                r,
                &child(path, "invokeContract"),
                UNBOUNDED,
            )?),
            HostFunctionType::CreateContract => HostFunction::CreateContract(
                CreateContractArgs::read_txrep(r, &child(path, "createContract"))?,
            ),
            HostFunctionType::UploadContractWasm => {
                HostFunction::UploadContractWasm(r.hex(&child(path, "wasm"))?)
            }
        })
    }
}

impl TxRepCodec for SorobanCredentials {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        match self {
            SorobanCredentials::SourceAccount => w.line(
                &child(path, "type"),
                SorobanCredentialsType::SourceAccount.name(),
            ),
            SorobanCredentials::Address(creds) => {
                w.line(&child(path, "type"), SorobanCredentialsType::Address.name());
                let p = child(path, "address");
                creds.address.write_txrep(w, &child(&p, "address"));
                w.line(&child(&p, "nonce"), creds.nonce);
                w.line(
                    &child(&p, "signatureExpirationLedger"),
                    creds.signature_expiration_ledger,
                );
                write_array(w, &child(&p, "signatureArgs"), &creds.signature_args);
            }
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(match r.named(&child(path, "type"), SorobanCredentialsType::from_name)? {
            SorobanCredentialsType::SourceAccount => SorobanCredentials::SourceAccount,
            SorobanCredentialsType::Address => {
                let p = child(path, "address");
                SorobanCredentials::Address(SorobanAddressCredentials {
                    address: ScAddress::read_txrep(r, &child(&p, "address"))?,
                    nonce: r.number(&child(&p, "nonce"))?,
                    signature_expiration_ledger: r
                        .number(&child(&p, "signatureExpirationLedger"))?,
                    signature_args: read_array(r, &child(&p, "signatureArgs"), UNBOUNDED)?,
                })
            }
        })
    }
}

impl TxRepCodec for SorobanAuthorizedFunction {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        match self {
            SorobanAuthorizedFunction::ContractFn(function) => {
                w.line(
                    &child(path, "type"),
                    SorobanAuthorizedFunctionType::ContractFn.name(),
                );
                let p = child(path, "contractFn");
                function
                    .contract_address
                    .write_txrep(w, &child(&p, "contractAddress"));
                w.symbol(&child(&p, "functionName"), &function.function_name);
                write_array(w, &child(&p, "args"), &function.args);
            }
            SorobanAuthorizedFunction::CreateContractHostFn(args) => {
                w.line(
                    &child(path, "type"),
                    SorobanAuthorizedFunctionType::CreateContractHostFn.name(),
                );
                args.write_txrep(w, &child(path, "createContractHostFn"));
            }
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(
            match r.named(&child(path, "type"), SorobanAuthorizedFunctionType::from_name)? {
                SorobanAuthorizedFunctionType::ContractFn => {
                    let p = child(path, "contractFn");
                    SorobanAuthorizedFunction::ContractFn(SorobanAuthorizedContractFunction {
                        contract_address: ScAddress::read_txrep(r, &child(&p, "contractAddress"))?,
                        function_name: r.string(&child(&p, "functionName"))?,
                        args: read_array(r, &child(&p, "args"), UNBOUNDED)?,
                    })
                }
                SorobanAuthorizedFunctionType::CreateContractHostFn => {
                    SorobanAuthorizedFunction::CreateContractHostFn(CreateContractArgs::read_txrep(
                        r,
                        &child(path, "createContractHostFn"),
                    )?)
                }
            },
        )
    }
}

impl TxRepCodec for SorobanAuthorizedInvocation {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.function.write_txrep(w, &child(path, "function"));
        write_array(w, &child(path, "subInvocations"), &self.sub_invocations);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(SorobanAuthorizedInvocation {
            function: SorobanAuthorizedFunction::read_txrep(r, &child(path, "function"))?,
            sub_invocations: read_array(r, &child(path, "subInvocations"), UNBOUNDED)?,
        })
    }
}

impl TxRepCodec for SorobanAuthorizationEntry {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.credentials.write_txrep(w, &child(path, "credentials"));
        self.root_invocation
            .write_txrep(w, &child(path, "rootInvocation"));
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(SorobanAuthorizationEntry {
            credentials: SorobanCredentials::read_txrep(r, &child(path, "credentials"))?,
            root_invocation: SorobanAuthorizedInvocation::read_txrep(
                r,
                &child(path, "rootInvocation"),
            )?,
        })
    }
}

impl TxRepCodec for InvokeHostFunctionOp {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.host_function.write_txrep(w, &child(path, "hostFunction"));
        write_array(w, &child(path, "auth"), &self.auth);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(InvokeHostFunctionOp {
            host_function: HostFunction::read_txrep(r, &child(path, "hostFunction"))?,
            auth: read_array(r, &child(path, "auth"), UNBOUNDED)?,
        })
    }
}

impl TxRepCodec for BumpFootprintExpirationOp {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.ext.write_txrep(w, &child(path, "ext"));
        w.line(&child(path, "ledgersToExpire"), self.ledgers_to_expire);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(BumpFootprintExpirationOp {
            ext: ExtensionPoint::read_txrep(r, &child(path, "ext"))?,
            ledgers_to_expire: r.number(&child(path, "ledgersToExpire"))?,
        })
    }
}

impl TxRepCodec for RestoreFootprintOp {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.ext.write_txrep(w, &child(path, "ext"));
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(RestoreFootprintOp {
            ext: ExtensionPoint::read_txrep(r, &child(path, "ext"))?,
        })
    }
}

impl TxRepCodec for SorobanTransactionData {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.ext.write_txrep(w, &child(path, "ext"));
        let res = child(path, "resources");
        let footprint = child(&res, "footprint");
        write_array(w, &child(&footprint, "readOnly"), &self.resources.footprint.read_only);
        write_array(w, &child(&footprint, "readWrite"), &self.resources.footprint.read_write);
        w.line(&child(&res, "instructions"), self.resources.instructions);
        w.line(&child(&res, "readBytes"), self.resources.read_bytes);
        w.line(&child(&res, "writeBytes"), self.resources.write_bytes);
        w.line(
            &child(&res, "contractEventsSizeBytes"),
            self.resources.contract_events_size_bytes,
        );
        w.line(&child(path, "refundableFee"), self.refundable_fee);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        let ext = ExtensionPoint::read_txrep(r, &child(path, "ext"))?;
        let res = child(path, "resources");
        let footprint = child(&res, "footprint");
        Ok(SorobanTransactionData {
            ext,
            resources: SorobanResources {
                footprint: LedgerFootprint {
                    read_only: read_array(r, &child(&footprint, "readOnly"), UNBOUNDED)?,
                    read_write: read_array(r, &child(&footprint, "readWrite"), UNBOUNDED)?,
                },
                instructions: r.number(&child(&res, "instructions"))?,
                read_bytes: r.number(&child(&res, "readBytes"))?,
                write_bytes: r.number(&child(&res, "writeBytes"))?,
                contract_events_size_bytes: r.number(&child(&res, "contractEventsSizeBytes"))?,
            },
            refundable_fee: r.number(&child(path, "refundableFee"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xdr::account::PublicKey;
    use crate::xdr::ledger_key::{
        ContractDataDurability, ContractEntryBodyType, LedgerKey, LedgerKeyContractData,
    };
    use crate::xdr::scval::{ScMapEntry, ScVal};

    fn roundtrip<T: TxRepCodec + PartialEq + std::fmt::Debug>(value: &T) -> String {
        let mut w = TxRepWriter::new();
        value.write_txrep(&mut w, "x");
        let text = w.finish().unwrap();
        let mut r = TxRepReader::parse(&text).unwrap();
        assert_eq!(&T::read_txrep(&mut r, "x").unwrap(), value);
        r.finish().unwrap();
        text
    }

    fn invocation(function: &str, subs: Vec<SorobanAuthorizedInvocation>) -> SorobanAuthorizedInvocation {
        SorobanAuthorizedInvocation {
            function: SorobanAuthorizedFunction::ContractFn(SorobanAuthorizedContractFunction {
                contract_address: ScAddress::Contract([1; 32]),
                function_name: function.to_string(),
                args: vec![ScVal::U32(3), ScVal::Address(ScAddress::Account(PublicKey::Ed25519([2; 32])))],
            }),
            sub_invocations: subs,
        }
    }

    #[test]
    fn test_invoke_with_nested_auth() {
        let op = InvokeHostFunctionOp {
            host_function: HostFunction::invoke_contract(
                ScAddress::Contract([1; 32]),
                "swap",
                vec![ScVal::I128((-1i128).into())],
            ),
            auth: vec![
                SorobanAuthorizationEntry {
                    credentials: SorobanCredentials::Address(SorobanAddressCredentials {
                        address: ScAddress::Account(PublicKey::Ed25519([2; 32])),
                        nonce: -12,
                        signature_expiration_ledger: 1000,
                        signature_args: vec![ScVal::Map(Some(vec![ScMapEntry {
                            key: ScVal::symbol("public_key"),
                            val: ScVal::Bytes(vec![2; 32]),
                        }]))],
                    }),
                    root_invocation: invocation(
                        "swap",
                        vec![invocation("transfer", vec![invocation("inner fn", vec![])])],
                    ),
                },
                SorobanAuthorizationEntry {
                    credentials: SorobanCredentials::SourceAccount,
                    root_invocation: SorobanAuthorizedInvocation {
                        function: SorobanAuthorizedFunction::CreateContractHostFn(
                            CreateContractArgs {
                                contract_id_preimage: ContractIdPreimage::FromAsset(Asset::Native),
                                executable: ContractExecutable::Token,
                            },
                        ),
                        sub_invocations: vec![],
                    },
                },
            ],
        };
        let text = roundtrip(&op);
        assert!(text.contains("x.hostFunction.invokeContract[1].sym: swap\n"));
        assert!(text.contains(
            "x.auth[0].rootInvocation.subInvocations[0].subInvocations[0].function.contractFn.functionName: \"inner fn\"\n"
        ));
        assert!(text.contains("x.auth[0].credentials.address.signatureArgs[0].map[0].key.sym: public_key\n"));
    }

    #[test]
    fn test_create_and_upload() {
        roundtrip(&HostFunction::CreateContract(CreateContractArgs {
            contract_id_preimage: ContractIdPreimage::FromAddress {
                address: ScAddress::Account(PublicKey::Ed25519([3; 32])),
                salt: [4; 32],
            },
            executable: ContractExecutable::Wasm([5; 32]),
        }));
        let text = roundtrip(&HostFunction::UploadContractWasm(vec![0, 0x61, 0x73, 0x6d]));
        assert!(text.ends_with("x.wasm: 0061736d\n"));
    }

    #[test]
    fn test_footprint_ops() {
        let text = roundtrip(&BumpFootprintExpirationOp {
            ext: ExtensionPoint::V0,
            ledgers_to_expire: 120,
        });
        assert_eq!(text, "x.ext.v: 0\nx.ledgersToExpire: 120\n");
        roundtrip(&RestoreFootprintOp::default());
    }

    #[test]
    fn test_transaction_data() {
        let data = SorobanTransactionData {
            ext: ExtensionPoint::V0,
            resources: SorobanResources {
                footprint: LedgerFootprint {
                    read_only: vec![LedgerKey::ContractCode(
                        crate::xdr::ledger_key::LedgerKeyContractCode {
                            hash: [6; 32],
                            body_type: ContractEntryBodyType::DataEntry,
                        },
                    )],
                    read_write: vec![LedgerKey::ContractData(LedgerKeyContractData {
                        contract: ScAddress::Contract([7; 32]),
                        key: ScVal::Vec(Some(vec![ScVal::symbol("Balance")])),
                        durability: ContractDataDurability::Persistent,
                        body_type: ContractEntryBodyType::DataEntry,
                    })],
                },
                instructions: 1_000_000,
                read_bytes: 2000,
                write_bytes: 300,
                contract_events_size_bytes: 0,
            },
            refundable_fee: 5000,
        };
        let text = roundtrip(&data);
        assert!(text.contains("x.resources.footprint.readOnly[0].type: CONTRACT_CODE\n"));
        assert!(text.ends_with("x.refundableFee: 5000\n"));
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let mut r = TxRepReader::parse("x.v: 1\n").unwrap();
        assert!(ExtensionPoint::read_txrep(&mut r, "x").is_err());
    }
}
