//! Smart-contract operations, authorization entries and resource declarations

use crate::error::{DecodeError, WasmStellarError};
use crate::keypair::Signer;
use crate::network::Network;
use crate::xdr::account::Hash;
use crate::xdr::asset::Asset;
use crate::xdr::codec::{xdr_enum, XdrCodec, XdrReader, XdrWriter, UNBOUNDED};
use crate::xdr::ledger_key::LedgerKey;
use crate::xdr::scval::{ContractExecutable, ScAddress, ScMapEntry, ScVal, SCSYMBOL_LIMIT};
use crate::xdr::transaction::EnvelopeType;
use sha2::{Digest, Sha256};
use tracing::debug;

xdr_enum! {
    pub enum HostFunctionType {
        InvokeContract = 0 => "HOST_FUNCTION_TYPE_INVOKE_CONTRACT",
        CreateContract = 1 => "HOST_FUNCTION_TYPE_CREATE_CONTRACT",
        UploadContractWasm = 2 => "HOST_FUNCTION_TYPE_UPLOAD_CONTRACT_WASM",
    }
}

xdr_enum! {
    pub enum ContractIdPreimageType {
        FromAddress = 0 => "CONTRACT_ID_PREIMAGE_FROM_ADDRESS",
        FromAsset = 1 => "CONTRACT_ID_PREIMAGE_FROM_ASSET",
    }
}

xdr_enum! {
    pub enum SorobanAuthorizedFunctionType {
        ContractFn = 0 => "SOROBAN_AUTHORIZED_FUNCTION_TYPE_CONTRACT_FN",
        CreateContractHostFn = 1 => "SOROBAN_AUTHORIZED_FUNCTION_TYPE_CREATE_CONTRACT_HOST_FN",
    }
}

xdr_enum! {
    pub enum SorobanCredentialsType {
        SourceAccount = 0 => "SOROBAN_CREDENTIALS_SOURCE_ACCOUNT",
        Address = 1 => "SOROBAN_CREDENTIALS_ADDRESS",
    }
}

/// Reserved extension slot; only version 0 exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExtensionPoint {
    #[default]
    V0,
}

impl XdrCodec for ExtensionPoint {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_i32(0);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match r.read_i32()? {
            0 => Ok(ExtensionPoint::V0),
            value => Err(DecodeError::UnknownDiscriminant {
                type_name: "ExtensionPoint",
                value,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractIdPreimage {
    FromAddress { address: ScAddress, salt: Hash },
    FromAsset(Asset),
}

impl XdrCodec for ContractIdPreimage {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            ContractIdPreimage::FromAddress { address, salt } => {
                ContractIdPreimageType::FromAddress.encode(w);
                address.encode(w);
                w.write_fixed(salt);
            }
            ContractIdPreimage::FromAsset(asset) => {
                ContractIdPreimageType::FromAsset.encode(w);
                asset.encode(w);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match ContractIdPreimageType::decode(r)? {
            ContractIdPreimageType::FromAddress => ContractIdPreimage::FromAddress {
                address: ScAddress::decode(r)?,
                salt: r.read_fixed()?,
            },
            ContractIdPreimageType::FromAsset => ContractIdPreimage::FromAsset(Asset::decode(r)?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContractArgs {
    pub contract_id_preimage: ContractIdPreimage,
    pub executable: ContractExecutable,
}

impl XdrCodec for CreateContractArgs {
    fn encode(&self, w: &mut XdrWriter) {
        self.contract_id_preimage.encode(w);
        self.executable.encode(w);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(CreateContractArgs {
            contract_id_preimage: ContractIdPreimage::decode(r)?,
            executable: ContractExecutable::decode(r)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostFunction {
    /// Contract address, function symbol, then the call arguments
    InvokeContract(Vec<ScVal>),
    CreateContract(CreateContractArgs),
    UploadContractWasm(Vec<u8>),
}

impl HostFunction {
    pub fn function_type(&self) -> HostFunctionType {
        match self {
            HostFunction::InvokeContract(_) => HostFunctionType::InvokeContract,
            HostFunction::CreateContract(_) => HostFunctionType::CreateContract,
            HostFunction::UploadContractWasm(_) => HostFunctionType::UploadContractWasm,
        }
    }

    /// Build the argument vector of a contract call
    pub fn invoke_contract(contract: ScAddress, function: &str, args: Vec<ScVal>) -> Self {
        let mut values = Vec::with_capacity(args.len() + 2);
        values.push(ScVal::Address(contract));
        values.push(ScVal::symbol(function));
        values.extend(args);
        HostFunction::InvokeContract(values)
    }
}

impl XdrCodec for HostFunction {
    fn encode(&self, w: &mut XdrWriter) {
        self.function_type().encode(w);
        match self {
            HostFunction::InvokeContract(args) => w.write_array(args),
            HostFunction::CreateContract(args) => args.encode(w),
            HostFunction::UploadContractWasm(wasm) => w.write_var_opaque(wasm),
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match HostFunctionType::decode(r)? {
            HostFunctionType::InvokeContract => {
                HostFunction::InvokeContract(r.read_array(UNBOUNDED)?)
            }
            HostFunctionType::CreateContract => {
                HostFunction::CreateContract(CreateContractArgs::decode(r)?)
            }
            HostFunctionType::UploadContractWasm => {
                HostFunction::UploadContractWasm(r.read_var_opaque(UNBOUNDED)?)
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SorobanAuthorizedContractFunction {
    pub contract_address: ScAddress,
    pub function_name: String,
    pub args: Vec<ScVal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SorobanAuthorizedFunction {
    ContractFn(SorobanAuthorizedContractFunction),
    CreateContractHostFn(CreateContractArgs),
}

impl XdrCodec for SorobanAuthorizedFunction {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            SorobanAuthorizedFunction::ContractFn(f) => {
                SorobanAuthorizedFunctionType::ContractFn.encode(w);
                f.contract_address.encode(w);
                w.write_string(&f.function_name);
                w.write_array(&f.args);
            }
            SorobanAuthorizedFunction::CreateContractHostFn(args) => {
                SorobanAuthorizedFunctionType::CreateContractHostFn.encode(w);
                args.encode(w);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match SorobanAuthorizedFunctionType::decode(r)? {
            SorobanAuthorizedFunctionType::ContractFn => {
                SorobanAuthorizedFunction::ContractFn(SorobanAuthorizedContractFunction {
                    contract_address: ScAddress::decode(r)?,
                    function_name: r.read_string(SCSYMBOL_LIMIT)?,
                    args: r.read_array(UNBOUNDED)?,
                })
            }
            SorobanAuthorizedFunctionType::CreateContractHostFn => {
                SorobanAuthorizedFunction::CreateContractHostFn(CreateContractArgs::decode(r)?)
            }
        })
    }
}

/// Authorized call tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SorobanAuthorizedInvocation {
    pub function: SorobanAuthorizedFunction,
    pub sub_invocations: Vec<SorobanAuthorizedInvocation>,
}

impl XdrCodec for SorobanAuthorizedInvocation {
    fn encode(&self, w: &mut XdrWriter) {
        self.function.encode(w);
        w.write_array(&self.sub_invocations);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(SorobanAuthorizedInvocation {
            function: SorobanAuthorizedFunction::decode(r)?,
            sub_invocations: r.read_array(UNBOUNDED)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SorobanAddressCredentials {
    pub address: ScAddress,
    pub nonce: i64,
    pub signature_expiration_ledger: u32,
    pub signature_args: Vec<ScVal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SorobanCredentials {
    SourceAccount,
    Address(SorobanAddressCredentials),
}

impl XdrCodec for SorobanCredentials {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            SorobanCredentials::SourceAccount => SorobanCredentialsType::SourceAccount.encode(w),
            SorobanCredentials::Address(creds) => {
                SorobanCredentialsType::Address.encode(w);
                creds.address.encode(w);
                w.write_i64(creds.nonce);
                w.write_u32(creds.signature_expiration_ledger);
                w.write_array(&creds.signature_args);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match SorobanCredentialsType::decode(r)? {
            SorobanCredentialsType::SourceAccount => SorobanCredentials::SourceAccount,
            SorobanCredentialsType::Address => {
                SorobanCredentials::Address(SorobanAddressCredentials {
                    address: ScAddress::decode(r)?,
                    nonce: r.read_i64()?,
                    signature_expiration_ledger: r.read_u32()?,
                    signature_args: r.read_array(UNBOUNDED)?,
                })
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SorobanAuthorizationEntry {
    pub credentials: SorobanCredentials,
    pub root_invocation: SorobanAuthorizedInvocation,
}

impl SorobanAuthorizationEntry {
    /// Sign address credentials for `network`, valid until `expiration_ledger`.
    ///
    /// Replaces the signature arguments with a single
    /// `{ public_key: bytes, signature: bytes }` map.
    pub fn sign(
        &mut self,
        signer: &dyn Signer,
        network: &Network,
        expiration_ledger: u32,
    ) -> Result<(), WasmStellarError> {
        let SorobanCredentials::Address(creds) = &mut self.credentials else {
            return Err(WasmStellarError::InvalidArgument(
                "Source-account credentials carry no signature".to_string(),
            ));
        };

        let preimage = HashIdPreimage::SorobanAuthorization {
            network_id: *network.id(),
            nonce: creds.nonce,
            signature_expiration_ledger: expiration_ledger,
            invocation: self.root_invocation.clone(),
        };
        let payload: [u8; 32] = Sha256::digest(preimage.to_xdr()).into();
        let signature = signer.sign(&payload)?;

        creds.signature_expiration_ledger = expiration_ledger;
        creds.signature_args = vec![ScVal::Map(Some(vec![
            ScMapEntry {
                key: ScVal::symbol("public_key"),
                val: ScVal::Bytes(signer.public_key().to_vec()),
            },
            ScMapEntry {
                key: ScVal::symbol("signature"),
                val: ScVal::Bytes(signature.to_vec()),
            },
        ]))];
        debug!(expiration_ledger, "signed soroban authorization entry");
        Ok(())
    }
}

impl XdrCodec for SorobanAuthorizationEntry {
    fn encode(&self, w: &mut XdrWriter) {
        self.credentials.encode(w);
        self.root_invocation.encode(w);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(SorobanAuthorizationEntry {
            credentials: SorobanCredentials::decode(r)?,
            root_invocation: SorobanAuthorizedInvocation::decode(r)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeHostFunctionOp {
    pub host_function: HostFunction,
    pub auth: Vec<SorobanAuthorizationEntry>,
}

impl XdrCodec for InvokeHostFunctionOp {
    fn encode(&self, w: &mut XdrWriter) {
        self.host_function.encode(w);
        w.write_array(&self.auth);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(InvokeHostFunctionOp {
            host_function: HostFunction::decode(r)?,
            auth: r.read_array(UNBOUNDED)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpFootprintExpirationOp {
    pub ext: ExtensionPoint,
    pub ledgers_to_expire: u32,
}

impl XdrCodec for BumpFootprintExpirationOp {
    fn encode(&self, w: &mut XdrWriter) {
        self.ext.encode(w);
        w.write_u32(self.ledgers_to_expire);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(BumpFootprintExpirationOp {
            ext: ExtensionPoint::decode(r)?,
            ledgers_to_expire: r.read_u32()?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreFootprintOp {
    pub ext: ExtensionPoint,
}

impl XdrCodec for RestoreFootprintOp {
    fn encode(&self, w: &mut XdrWriter) {
        self.ext.encode(w);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(RestoreFootprintOp {
            ext: ExtensionPoint::decode(r)?,
        })
    }
}

/// Ledger entries a contract invocation reads and writes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerFootprint {
    pub read_only: Vec<LedgerKey>,
    pub read_write: Vec<LedgerKey>,
}

impl XdrCodec for LedgerFootprint {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_array(&self.read_only);
        w.write_array(&self.read_write);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(LedgerFootprint {
            read_only: r.read_array(UNBOUNDED)?,
            read_write: r.read_array(UNBOUNDED)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SorobanResources {
    pub footprint: LedgerFootprint,
    pub instructions: u32,
    pub read_bytes: u32,
    pub write_bytes: u32,
    pub contract_events_size_bytes: u32,
}

impl XdrCodec for SorobanResources {
    fn encode(&self, w: &mut XdrWriter) {
        self.footprint.encode(w);
        w.write_u32(self.instructions);
        w.write_u32(self.read_bytes);
        w.write_u32(self.write_bytes);
        w.write_u32(self.contract_events_size_bytes);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(SorobanResources {
            footprint: LedgerFootprint::decode(r)?,
            instructions: r.read_u32()?,
            read_bytes: r.read_u32()?,
            write_bytes: r.read_u32()?,
            contract_events_size_bytes: r.read_u32()?,
        })
    }
}

/// Resource declaration attached to a transaction through ext v1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SorobanTransactionData {
    pub ext: ExtensionPoint,
    pub resources: SorobanResources,
    pub refundable_fee: i64,
}

impl XdrCodec for SorobanTransactionData {
    fn encode(&self, w: &mut XdrWriter) {
        self.ext.encode(w);
        self.resources.encode(w);
        w.write_i64(self.refundable_fee);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(SorobanTransactionData {
            ext: ExtensionPoint::decode(r)?,
            resources: SorobanResources::decode(r)?,
            refundable_fee: r.read_i64()?,
        })
    }
}

/// Hash preimages bound to a network id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashIdPreimage {
    ContractId {
        network_id: Hash,
        contract_id_preimage: ContractIdPreimage,
    },
    SorobanAuthorization {
        network_id: Hash,
        nonce: i64,
        signature_expiration_ledger: u32,
        invocation: SorobanAuthorizedInvocation,
    },
}

impl XdrCodec for HashIdPreimage {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            HashIdPreimage::ContractId {
                network_id,
                contract_id_preimage,
            } => {
                EnvelopeType::ContractId.encode(w);
                w.write_fixed(network_id);
                contract_id_preimage.encode(w);
            }
            HashIdPreimage::SorobanAuthorization {
                network_id,
                nonce,
                signature_expiration_ledger,
                invocation,
            } => {
                EnvelopeType::SorobanAuthorization.encode(w);
                w.write_fixed(network_id);
                w.write_i64(*nonce);
                w.write_u32(*signature_expiration_ledger);
                invocation.encode(w);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match EnvelopeType::decode(r)? {
            EnvelopeType::ContractId => Ok(HashIdPreimage::ContractId {
                network_id: r.read_fixed()?,
                contract_id_preimage: ContractIdPreimage::decode(r)?,
            }),
            EnvelopeType::SorobanAuthorization => Ok(HashIdPreimage::SorobanAuthorization {
                network_id: r.read_fixed()?,
                nonce: r.read_i64()?,
                signature_expiration_ledger: r.read_u32()?,
                invocation: SorobanAuthorizedInvocation::decode(r)?,
            }),
            other => Err(DecodeError::UnknownDiscriminant {
                type_name: "HashIdPreimage",
                value: other.discriminant(),
            }),
        }
    }
}

/// Contract id a create-contract call with `preimage` produces on `network`
pub fn contract_id(preimage: &ContractIdPreimage, network: &Network) -> Hash {
    let preimage = HashIdPreimage::ContractId {
        network_id: *network.id(),
        contract_id_preimage: preimage.clone(),
    };
    Sha256::digest(preimage.to_xdr()).into()
}
