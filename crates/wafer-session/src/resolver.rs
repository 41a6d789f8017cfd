// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential resolution: decides where credentials come from and rejects
//! incomplete input before any network I/O.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. appid configured
//! 2. session server URL configured
//! 3. Embedded mode has a header source
//! 4. operation name is `login` or `check`
//! 5. every field the operation needs is present and non-empty, in field order

use std::str::FromStr;

use tracing::debug;
use wafer_core::constants::{
    HEADER_CODE, HEADER_ENCRYPTED_DATA, HEADER_ID, HEADER_IV, HEADER_SKEY,
};
use wafer_core::{CallInput, CredentialSet, HeaderSource, InputMode, Operation, WaferError};

use crate::SessionSettings;

/// Where this call's credentials are read from.
#[derive(Clone, Copy)]
pub enum InputSource<'a> {
    /// Inbound request headers set by the front-end SDK.
    Headers(&'a (dyn HeaderSource + Sync)),
    /// Arguments passed explicitly by the embedding application.
    Positional(&'a [String]),
}

/// One credential field: its name in messages and the header carrying it.
struct FieldDef {
    name: &'static str,
    header: &'static str,
}

const LOGIN_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "code",
        header: HEADER_CODE,
    },
    FieldDef {
        name: "encryptData",
        header: HEADER_ENCRYPTED_DATA,
    },
    FieldDef {
        name: "iv",
        header: HEADER_IV,
    },
];

const CHECK_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "id",
        header: HEADER_ID,
    },
    FieldDef {
        name: "skey",
        header: HEADER_SKEY,
    },
];

fn fields(operation: Operation) -> &'static [FieldDef] {
    match operation {
        Operation::Login => LOGIN_FIELDS,
        Operation::Check => CHECK_FIELDS,
    }
}

/// Resolves credentials for an operation named at runtime.
pub fn resolve(
    settings: &SessionSettings,
    act: &str,
    input: CallInput<'_>,
) -> Result<CredentialSet, WaferError> {
    let source = select_source(settings, input)?;
    let operation = Operation::from_str(act).map_err(|_| WaferError::InvalidAct {
        act: act.to_string(),
    })?;
    resolve_credentials(operation, source)
}

/// Resolves credentials for a known operation.
pub fn resolve_operation(
    settings: &SessionSettings,
    operation: Operation,
    input: CallInput<'_>,
) -> Result<CredentialSet, WaferError> {
    let source = select_source(settings, input)?;
    resolve_credentials(operation, source)
}

/// Checks the adapter preconditions and picks the input source for its mode.
pub fn select_source<'a>(
    settings: &SessionSettings,
    input: CallInput<'a>,
) -> Result<InputSource<'a>, WaferError> {
    if settings.appid.is_empty() {
        return Err(WaferError::MissingConfig { field: "appid" });
    }
    if settings.auth_server_url.is_empty() {
        return Err(WaferError::MissingConfig {
            field: "AuthServerUrl",
        });
    }
    match settings.mode {
        InputMode::Embedded => input
            .headers
            .map(InputSource::Headers)
            .ok_or(WaferError::MissingHeaderSource),
        InputMode::Standalone => Ok(InputSource::Positional(input.args)),
    }
}

/// Pulls and validates every field the operation needs from `source`.
pub fn resolve_credentials(
    operation: Operation,
    source: InputSource<'_>,
) -> Result<CredentialSet, WaferError> {
    let defs = fields(operation);

    let values: Vec<String> = match source {
        InputSource::Headers(headers) => defs
            .iter()
            .map(|field| match headers.header(field.header) {
                Some(value) if !value.is_empty() => Ok(value.to_string()),
                _ => Err(WaferError::EmptyHeader {
                    header: field.header,
                }),
            })
            .collect::<Result<_, _>>()?,
        InputSource::Positional(args) => {
            if args.len() < defs.len() {
                return Err(WaferError::ParamCount {
                    operation,
                    expected: defs.len(),
                    given: args.len(),
                });
            }
            defs
                .iter()
                .zip(args)
                .enumerate()
                .map(|(index, (field, value))| {
                    if value.is_empty() {
                        Err(WaferError::EmptyParam {
                            operation,
                            index,
                            field: field.name,
                        })
                    } else {
                        Ok(value.clone())
                    }
                })
                .collect::<Result<_, _>>()?
        }
    };

    debug!(%operation, "credentials resolved");

    let mut values = values.into_iter();
    let mut next = || values.next().unwrap_or_default();
    Ok(match operation {
        Operation::Login => CredentialSet::Login {
            code: next(),
            encrypted_data: next(),
            iv: next(),
        },
        Operation::Check => CredentialSet::Check {
            id: next(),
            skey: next(),
        },
    })
}
