use bitflags::bitflags;
use zerocopy::{FromBytes, Immutable, KnownLayout};

#[derive(Clone, Copy, Debug, Eq, PartialEq, FromBytes, Immutable, KnownLayout)]
#[repr(transparent)]
pub struct CoffCharacteristics(u16);

bitflags! {
    impl CoffCharacteristics: u16 {
        /// The file has no base relocations and must load at its preferred base address.
        const RELOCS_STRIPPED = 1;

        /// The image is valid and can be run.
        const EXECUTABLE_IMAGE = 1 << 1;

        const LINE_NUMS_STRIPPED = 1 << 2;

        const LOCAL_SYMS_STRIPPED = 1 << 3;

        const AGGRESSIVE_WS_TRIM = 1 << 4;

        /// The application can handle addresses above 2 GB.
        const LARGE_ADDRESS_AWARE = 1 << 5;

        const RESERVED = 1 << 6;

        const BYTES_REVERSED_LO = 1 << 7;

        /// The machine is based on a 32-bit word architecture.
        const MACHINE_32BIT = 1 << 8;

        const DEBUG_STRIPPED = 1 << 9;

        const REMOVABLE_RUN_FROM_SWAP = 1 << 10;

        const NET_RUN_FROM_SWAP = 1 << 11;

        const SYSTEM = 1 << 12;

        /// The image is a dynamic-link library.
        const DLL = 1 << 13;

        const UP_SYSTEM_ONLY = 1 << 14;

        const BYTES_REVERSED_HI = 1 << 15;
    }
}
