//! Escenario de votación con token.
//!
//! Tres contratos: `SimplestVote1202` (independiente), `SampleToken` y
//! `TokenVote1202`, que se inicializa con la dirección del token, las
//! opciones de voto `[1, 2, 3]` y la lista de cuentas habilitadas.
use deploy_core::{Address, AddressError, Arg, Artifact, Bytes, Sequence};

pub const SIMPLEST_VOTE: &str = "SimplestVote1202";
pub const SAMPLE_TOKEN: &str = "SampleToken";
pub const TOKEN_VOTE: &str = "TokenVote1202";
pub const INIT_METHOD: &str = "init";
pub const VOTE_OPTIONS: [u64; 3] = [1, 2, 3];

/// Cuentas de desarrollo habilitadas para votar.
pub const DEV_ACCOUNTS: [&str; 3] = ["0xd73A01C4b9D7175EFa05f414E757e75fc1e14b9F",
                                     "0x168fbF3566166A088ca6D392F00087197DccBD02",
                                     "0xA791c85dF0CC0866dddDF5dCfC2dda639dFA83Bf"];

/// Bytecode compilado de cada contrato (lo provee el toolchain externo).
#[derive(Debug, Clone)]
pub struct VoteTokenBytecodes {
    pub simplest_vote: Bytes,
    pub sample_token: Bytes,
    pub token_vote: Bytes,
}

pub fn parse_accounts(literals: &[&str]) -> Result<Vec<Address>, AddressError> {
    literals.iter().map(|s| Address::parse(s)).collect()
}

pub fn vote_token_sequence(bytecodes: VoteTokenBytecodes, accounts: &[Address]) -> Sequence {
    let mut b = Sequence::builder();
    b.push_deploy(Artifact::new(SIMPLEST_VOTE, bytecodes.simplest_vote));
    let token = b.push_deploy(Artifact::new(SAMPLE_TOKEN, bytecodes.sample_token));
    let vote = b.push_deploy(Artifact::new(TOKEN_VOTE, bytecodes.token_vote));
    b.invoke(vote,
             INIT_METHOD,
             vec![Arg::Reference(token),
                  Arg::list(VOTE_OPTIONS),
                  Arg::list(accounts.iter().copied())])
     .build()
}
