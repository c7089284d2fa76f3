#[cfg(target_os = "solana")]
use pinocchio::syscalls::sol_memcmp_;
use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::{find_program_address, Pubkey},
    ProgramResult,
};
use pinocchio_system::ID as SYSTEM_ID;

#[allow(unused_imports)]
use std::mem::MaybeUninit;

#[inline(always)]
#[cfg(target_os = "solana")]
pub fn sol_assert_bytes_eq(left: &[u8], right: &[u8], len: usize) -> bool {
    if left.len() != len || right.len() != len {
        return false;
    }
    unsafe {
        let mut result = MaybeUninit::<i32>::uninit();
        sol_memcmp_(
            left.as_ptr(),
            right.as_ptr(),
            len as u64,
            result.as_mut_ptr() as *mut i32,
        );
        result.assume_init() == 0
    }
}

#[cfg(not(target_os = "solana"))]
pub fn sol_assert_bytes_eq(left: &[u8], right: &[u8], len: usize) -> bool {
    left.len() == len && right.len() == len && left == right
}

macro_rules! sol_assert {
  ($func_name:ident, $($param:ident: $type:ty),* $(,)? | $check:expr) => {
      #[inline(always)]
      pub fn $func_name<E: Into<ProgramError>>($($param: $type,)* error: E) -> ProgramResult {
          if $check {
              Ok(())
          } else {
              Err(error.into())
          }
      }
  };
}

macro_rules! sol_assert_return {
  ($func_name:ident, $return_type:ty, $($param:ident: $type:ty),* $(,)? | $check:expr) => {
      #[inline(always)]
      pub fn $func_name<E: Into<ProgramError>>($($param: $type,)* error: E) -> Result<$return_type, ProgramError> {
          match $check {
              Some(value) => Ok(value),
              None => Err(error.into()),
          }
      }
  };
}

sol_assert_return!(check_any_pda, u8, seeds: &[&[u8]], target_key: &Pubkey, program_id: &Pubkey | {
  let (pda, bump) = find_program_address(seeds, program_id);
  if sol_assert_bytes_eq(pda.as_ref(), target_key.as_ref(), 32) {
    Some(bump)
  } else {
    None
  }
});

sol_assert!(check_signer, account: &AccountInfo |
  account.is_signer()
);

sol_assert!(check_writable, account: &AccountInfo |
  account.is_writable()
);

sol_assert!(check_system_program, account: &AccountInfo |
  sol_assert_bytes_eq(account.key().as_ref(), SYSTEM_ID.as_ref(), 32)
);
