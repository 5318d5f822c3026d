#![no_std]

pub mod nft;
