#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use hope_data as data;

#[doc(inline)]
pub use hope_3d as k3d;

#[doc(inline)]
pub use hope_io as io;

#[doc(inline)]
pub use hope_download as download;

#[doc(inline)]
pub use hope_viz as viz;
