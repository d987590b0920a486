//! Demo runtime: builds hardware from configuration and runs the cycle loop.
//!
//! Every cycle reads all hardware, holds each joint at its measured position
//! (position command := position state) and writes all hardware back. The
//! loop keeps timing statistics and stops on Ctrl-C, after the configured
//! number of cycles, or on the first error.

use crate::components::{Joint, Sensor};
use crate::config::{RuntimeConfig, hardware_kind};
use crate::driver_registry::{DriverKind, DriverRegistry, RegistryError};
use crate::hardware::{ActuatorHardware, SensorHardware, SystemHardware};
use hwif_common::component_info::HardwareInfo;
use hwif_common::config::ConfigError;
use hwif_common::consts::HW_IF_POSITION;
use hwif_common::error::{HwError, HwResult};
use hwif_common::types::Status;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failures of the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Invalid runtime configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Driver lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A hardware unit or one of its components failed.
    #[error("Hardware {hardware}: {source}")]
    Hardware {
        /// Hardware unit name.
        hardware: String,
        /// Underlying failure.
        source: HwError,
    },
}

/// Timing statistics for loop monitoring.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimingStats {
    /// Number of cycles executed.
    pub cycle_count: u64,
    /// Cycles that exceeded the target period.
    pub timing_violations: u64,
    /// Longest observed cycle.
    pub max_cycle_time_us: u64,
    /// Sum of cycle times for average calculation.
    pub total_cycle_time_us: u64,
}

impl TimingStats {
    /// Mean cycle time, 0 before the first cycle.
    pub fn average_cycle_time_us(&self) -> u64 {
        self.total_cycle_time_us
            .checked_div(self.cycle_count)
            .unwrap_or(0)
    }
}

/// One configured hardware unit with the components it serves.
enum Unit {
    Actuator {
        adapter: ActuatorHardware,
        joint: Joint,
    },
    Sensor {
        adapter: SensorHardware,
        sensors: Vec<Sensor>,
    },
    System {
        adapter: SystemHardware,
        joints: Vec<Joint>,
        sensors: Vec<Sensor>,
    },
}

struct HardwareUnit {
    name: String,
    unit: Unit,
}

impl HardwareUnit {
    fn build(info: &HardwareInfo, registry: &DriverRegistry) -> Result<Self, RuntimeError> {
        let wrap = |source: HwError| RuntimeError::Hardware {
            hardware: info.name.clone(),
            source,
        };
        let joints = info
            .joints
            .iter()
            .map(Joint::from_info)
            .collect::<HwResult<Vec<_>>>()
            .map_err(wrap)?;
        let sensors = info
            .sensors
            .iter()
            .map(Sensor::from_info)
            .collect::<HwResult<Vec<_>>>()
            .map_err(wrap)?;

        let unit = match hardware_kind(info)? {
            DriverKind::Actuator => {
                let mut adapter = registry.create_actuator(&info.class_type)?;
                adapter.configure(info).map_err(wrap)?;
                let joint = single_joint(info, joints).map_err(wrap)?;
                Unit::Actuator { adapter, joint }
            }
            DriverKind::Sensor => {
                let mut adapter = registry.create_sensor(&info.class_type)?;
                adapter.configure(info).map_err(wrap)?;
                Unit::Sensor { adapter, sensors }
            }
            DriverKind::System => {
                let mut adapter = registry.create_system(&info.class_type)?;
                adapter.configure(info).map_err(wrap)?;
                Unit::System {
                    adapter,
                    joints,
                    sensors,
                }
            }
        };

        info!(
            hardware = %info.name,
            driver = %info.class_type,
            joints = info.joints.len(),
            sensors = info.sensors.len(),
            "Hardware configured"
        );
        Ok(Self {
            name: info.name.clone(),
            unit,
        })
    }

    fn start(&mut self) -> HwResult {
        match &mut self.unit {
            Unit::Actuator { adapter, .. } => adapter.start(),
            Unit::Sensor { adapter, .. } => adapter.start(),
            Unit::System { adapter, .. } => adapter.start(),
        }
    }

    fn stop(&mut self) -> HwResult {
        match &mut self.unit {
            Unit::Actuator { adapter, .. } => adapter.stop(),
            Unit::Sensor { adapter, .. } => adapter.stop(),
            Unit::System { adapter, .. } => adapter.stop(),
        }
    }

    fn status(&self) -> Status {
        match &self.unit {
            Unit::Actuator { adapter, .. } => adapter.status(),
            Unit::Sensor { adapter, .. } => adapter.status(),
            Unit::System { adapter, .. } => adapter.status(),
        }
    }

    /// read → hold position → write.
    fn cycle(&mut self) -> HwResult {
        match &mut self.unit {
            Unit::Actuator { adapter, joint } => {
                adapter.read_joint(joint)?;
                hold_position(joint)?;
                adapter.write_joint(joint)
            }
            Unit::Sensor { adapter, sensors } => adapter.read_sensors(sensors.iter_mut()),
            Unit::System {
                adapter,
                joints,
                sensors,
            } => {
                adapter.read_joints(joints.iter_mut())?;
                adapter.read_sensors(sensors.iter_mut())?;
                for joint in joints.iter_mut() {
                    hold_position(joint)?;
                }
                adapter.write_joints(joints.iter())
            }
        }
    }

    fn joints(&self) -> &[Joint] {
        match &self.unit {
            Unit::Actuator { joint, .. } => std::slice::from_ref(joint),
            Unit::Sensor { .. } => &[],
            Unit::System { joints, .. } => joints,
        }
    }

    fn sensors(&self) -> &[Sensor] {
        match &self.unit {
            Unit::Actuator { .. } => &[],
            Unit::Sensor { sensors, .. } | Unit::System { sensors, .. } => sensors,
        }
    }
}

fn start_unit(info: &HardwareInfo, registry: &DriverRegistry) -> Result<HardwareUnit, RuntimeError> {
    let mut unit = HardwareUnit::build(info, registry)?;
    unit.start().map_err(|source| RuntimeError::Hardware {
        hardware: unit.name.clone(),
        source,
    })?;
    debug!(hardware = %unit.name, "Hardware started");
    Ok(unit)
}

fn single_joint(info: &HardwareInfo, joints: Vec<Joint>) -> HwResult<Joint> {
    let count = joints.len();
    let mut joints = joints.into_iter();
    match (joints.next(), count) {
        (Some(joint), 1) => Ok(joint),
        _ => Err(HwError::Configuration(format!(
            "Actuator {} needs exactly one joint, {} listed",
            info.name, count
        ))),
    }
}

/// Copy the measured position into the position command, when the joint
/// has both.
fn hold_position(joint: &mut Joint) -> HwResult {
    let has = |names: &[String]| names.iter().any(|n| n == HW_IF_POSITION);
    if !has(joint.state_interface_names()) || !has(joint.command_interface_names()) {
        return Ok(());
    }
    let mut position = [0.0];
    joint.get_state(&mut position, &[HW_IF_POSITION])?;
    joint.set_command(&position, &[HW_IF_POSITION])
}

/// Owns every configured hardware unit and drives the cycle loop.
pub struct Runtime {
    config: RuntimeConfig,
    units: Vec<HardwareUnit>,
    running: Arc<AtomicBool>,
    cycle_time: Duration,
    stats: TimingStats,
}

impl Runtime {
    /// Create a runtime from validated configuration.
    ///
    /// # Errors
    /// Returns `RuntimeError::Config` if validation fails.
    pub fn new(config: RuntimeConfig) -> Result<Self, RuntimeError> {
        config.validate()?;

        let cycle_time = Duration::from_micros(u64::from(config.cycle_time_us));
        info!(
            "Runtime created with {} hardware units, cycle_time={}us",
            config.hardware.len(),
            config.cycle_time_us
        );

        Ok(Self {
            config,
            units: Vec::new(),
            running: Arc::new(AtomicBool::new(true)),
            cycle_time,
            stats: TimingStats::default(),
        })
    }

    /// Build, configure and start every hardware unit, in configuration order.
    ///
    /// # Errors
    /// The first failure. Units started before it are stopped again.
    pub fn init(&mut self, registry: &DriverRegistry) -> Result<(), RuntimeError> {
        info!("Initializing {} hardware units...", self.config.hardware.len());

        let mut failure = None;
        for info in &self.config.hardware {
            match start_unit(info, registry) {
                Ok(unit) => self.units.push(unit),
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }
        if let Some(e) = failure {
            self.shutdown_quietly();
            return Err(e);
        }

        info!("Runtime initialized successfully");
        Ok(())
    }

    /// Run one read → hold → write cycle over all units.
    ///
    /// # Errors
    /// The first unit failure, unchanged.
    pub fn cycle(&mut self) -> Result<(), RuntimeError> {
        for unit in &mut self.units {
            unit.cycle().map_err(|source| RuntimeError::Hardware {
                hardware: unit.name.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Run the cycle loop.
    ///
    /// Blocks until the running flag is cleared, the configured cycle count
    /// is reached, or a cycle fails.
    ///
    /// # Errors
    /// The failing cycle's error.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        info!(
            "Starting cycle loop (cycle_time={}us)...",
            self.cycle_time.as_micros()
        );

        if detect_rt_mode() {
            info!("Running in real-time mode");
        } else {
            info!("Running in standard (non-RT) mode");
        }

        let target_us = u64::from(self.config.cycle_time_us);
        while self.running.load(Ordering::SeqCst) {
            if self
                .config
                .cycles
                .is_some_and(|limit| self.stats.cycle_count >= limit)
            {
                break;
            }

            let cycle_start = Instant::now();
            self.cycle()?;

            let cycle_time_us = cycle_start.elapsed().as_micros() as u64;
            self.stats.cycle_count += 1;
            self.stats.total_cycle_time_us += cycle_time_us;
            self.stats.max_cycle_time_us = self.stats.max_cycle_time_us.max(cycle_time_us);

            if cycle_time_us > target_us {
                self.stats.timing_violations += 1;
                if self.stats.timing_violations <= 10
                    || self.stats.timing_violations % 1000 == 0
                {
                    warn!(
                        "Timing violation #{}: cycle took {}us (target {}us)",
                        self.stats.timing_violations, cycle_time_us, target_us
                    );
                }
            }

            let elapsed = cycle_start.elapsed();
            if elapsed < self.cycle_time {
                std::thread::sleep(self.cycle_time - elapsed);
            }

            if self.stats.cycle_count % 1000 == 0 {
                debug!(
                    "Cycle loop: {} cycles, avg={}us, max={}us, violations={}",
                    self.stats.cycle_count,
                    self.stats.average_cycle_time_us(),
                    self.stats.max_cycle_time_us,
                    self.stats.timing_violations
                );
            }
        }

        self.running.store(false, Ordering::SeqCst);
        info!(
            "Cycle loop stopped after {} cycles (violations: {})",
            self.stats.cycle_count, self.stats.timing_violations
        );
        Ok(())
    }

    /// Stop every started unit, in reverse start order.
    ///
    /// All units are attempted even if one fails.
    ///
    /// # Errors
    /// The first stop failure.
    pub fn shutdown(&mut self) -> Result<(), RuntimeError> {
        info!("Shutdown requested");
        self.running.store(false, Ordering::SeqCst);

        let mut first_error = None;
        for unit in self.units.iter_mut().rev() {
            if unit.status() != Status::Started {
                continue;
            }
            if let Err(source) = unit.stop() {
                warn!(hardware = %unit.name, error = %source, "Failed to stop hardware");
                first_error.get_or_insert(RuntimeError::Hardware {
                    hardware: unit.name.clone(),
                    source,
                });
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn shutdown_quietly(&mut self) {
        if let Err(e) = self.shutdown() {
            warn!("Cleanup after failed init: {e}");
        }
    }

    /// Get the running flag for signal handlers.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Get timing statistics.
    pub fn stats(&self) -> TimingStats {
        self.stats
    }

    /// Status of every built unit, in configuration order.
    pub fn hardware_status(&self) -> Vec<(&str, Status)> {
        self.units
            .iter()
            .map(|unit| (unit.name.as_str(), unit.status()))
            .collect()
    }

    /// Joint named `name`, across all units.
    pub fn joint(&self, name: &str) -> Option<&Joint> {
        self.units
            .iter()
            .flat_map(|unit| unit.joints())
            .find(|joint| joint.name() == name)
    }

    /// Sensor named `name`, across all units.
    pub fn sensor(&self, name: &str) -> Option<&Sensor> {
        self.units
            .iter()
            .flat_map(|unit| unit.sensors())
            .find(|sensor| sensor.name() == name)
    }
}

/// Detect if running in real-time mode by checking scheduler policy.
fn detect_rt_mode() -> bool {
    #[cfg(target_os = "linux")]
    {
        use libc::{SCHED_FIFO, SCHED_RR, sched_getscheduler};
        // SAFETY: sched_getscheduler(0) only queries the calling thread.
        let policy = unsafe { sched_getscheduler(0) };
        policy == SCHED_FIFO || policy == SCHED_RR
    }
    #[cfg(not(target_os = "linux"))]
    {
        false
    }
}
