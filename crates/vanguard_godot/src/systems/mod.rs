pub mod body_registry;
pub mod body_sync;

pub use body_registry::{BodyHandles, BodyRegistry};

pub use body_sync::{
    BodyFreed,
    apply_locomotion_commands_main_thread,
    despawn_freed_bodies_main_thread,
    sync_body_state_main_thread,
    sync_controller_activity_main_thread,
};
