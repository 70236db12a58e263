/*
SPDX-License-Identifier: MPL-2.0
*/

//! Output serialization for linked documents.

pub mod html;
pub mod plain;
